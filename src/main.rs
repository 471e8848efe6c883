use anyhow::Context;
use clap::Parser;
use linea_geo::config::cli::Command;
use linea_geo::utils::{logger, validation::Validate};
use linea_geo::{
    parse_geometry_str, CliConfig, FaultLocator, FunctionClient, PinCoordinates, ServiceConfig,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.command {
        Command::Locate {
            config: Some(path), ..
        } => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file {}", path))?,
        ),
        _ => None,
    };

    let verbose = cli.verbose || file_config.as_ref().is_some_and(TomlConfig::verbose);
    if cli.json_logs || file_config.as_ref().is_some_and(TomlConfig::json_logging) {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    match cli.command {
        Command::Parse { input } => {
            let geometry = parse_geometry_str(&input);
            match &geometry {
                Some(g) => tracing::info!("Parsed {} geometry", g.kind()),
                None => tracing::info!("No geometry could be read from input"),
            }

            let output = serde_json::json!({
                "geometry": geometry,
                "pin": PinCoordinates::from_geometry(geometry.as_ref()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Locate {
            linea_id,
            km,
            access_token,
            ..
        } => {
            // Configuration problems stop the process before any request.
            let service_config = match load_service_config(file_config) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Configuration validation failed: {}", e);
                    eprintln!("{}", e.user_friendly_message());
                    std::process::exit(1);
                }
            };

            let mut client = FunctionClient::new(&service_config);
            if let Some(token) = access_token {
                client = client.with_access_token(token);
            }

            let locator = FaultLocator::new(client);
            match locator.locate(&linea_id, km).await {
                Ok(fault) => println!("{}", serde_json::to_string_pretty(&fault)?),
                Err(e) => {
                    tracing::error!("Fault location failed: {}", e);
                    eprintln!("{}", e.user_friendly_message());
                    std::process::exit(2);
                }
            }
        }
    }

    Ok(())
}

fn load_service_config(file_config: Option<TomlConfig>) -> linea_geo::Result<ServiceConfig> {
    match file_config {
        Some(config) => {
            config.validate()?;
            Ok(config.into_service_config())
        }
        None => {
            let config = ServiceConfig::from_env()?;
            config.validate()?;
            Ok(config)
        }
    }
}
