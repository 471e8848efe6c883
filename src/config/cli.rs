use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "linea-geo")]
#[command(about = "Geometry parsing and fault location for transmission-line records")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log as JSON lines")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse a geometry value (GeoJSON, JSON-encoded GeoJSON or WKT)
    Parse {
        /// Raw value as stored in the geometry column
        input: String,
    },
    /// Compute the position of a fault along a line
    Locate {
        #[arg(long)]
        linea_id: String,

        #[arg(long)]
        km: f64,

        /// TOML file with a [service] table; environment variables otherwise
        #[arg(long)]
        config: Option<String>,

        /// Session token used instead of the anon key for Authorization
        #[arg(long)]
        access_token: Option<String>,
    },
}
