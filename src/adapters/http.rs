use crate::core::location::extract_location;
use crate::domain::model::Location;
use crate::domain::ports::{ConfigProvider, LocationService};
use crate::utils::error::{GeoError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;

const COMPUTE_FAULT_LOCATION: &str = "compute-fault-location";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComputeLocationRequest<'a> {
    linea_id: &'a str,
    km: f64,
}

/// Client for the backend's edge functions. Construct one per
/// configuration and share it; it holds no per-request state.
#[derive(Debug, Clone)]
pub struct FunctionClient {
    client: Client,
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl FunctionClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self {
            client,
            base_url: config.service_url().trim_end_matches('/').to_string(),
            anon_key: config.anon_key().to_string(),
            access_token: config.access_token().map(str::to_string),
        }
    }

    /// Uses the session token of a signed-in user instead of the anon key
    /// for `Authorization`.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    fn function_url(&self, name: &str) -> String {
        format!("{}/functions/v1/{}", self.base_url, name)
    }

    fn bearer(&self) -> String {
        format!(
            "Bearer {}",
            self.access_token.as_deref().unwrap_or(&self.anon_key)
        )
    }

    /// Posts `body` to the named function and returns the decoded JSON answer.
    async fn invoke<B: Serialize + ?Sized>(&self, name: &str, body: &B) -> Result<Value> {
        let url = self.function_url(name);
        tracing::debug!("Invoking function: {}", url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .header("Authorization", self.bearer())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Function {} response status: {}", name, status);

        if !status.is_success() {
            let message = read_error_message(response).await;
            tracing::error!("Function {} failed ({}): {}", name, status, message);
            return Err(GeoError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl LocationService for FunctionClient {
    async fn compute_fault_location(&self, linea_id: &str, km: f64) -> Result<Location> {
        let payload = self
            .invoke(COMPUTE_FAULT_LOCATION, &ComputeLocationRequest { linea_id, km })
            .await?;
        extract_location(&payload)
    }
}

/// Best-effort human message from a failed response: `error` or `message`
/// of a JSON body, the raw text otherwise, `HTTP <status>` as a last resort.
async fn read_error_message(response: Response) -> String {
    let status = response.status().as_u16();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));

    if is_json {
        return match response.json::<Value>().await {
            Ok(body) => message_from_json(&body),
            Err(_) => format!("HTTP {}", status),
        };
    }

    match response.text().await {
        Ok(text) if !text.is_empty() => text,
        _ => format!("HTTP {}", status),
    }
}

fn message_from_json(body: &Value) -> String {
    ["error", "message"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find_map(|value| match value {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use serde_json::json;

    fn config(url: &str) -> ServiceConfig {
        ServiceConfig {
            url: url.to_string(),
            anon_key: "anon".to_string(),
            access_token: None,
        }
    }

    #[test]
    fn test_function_url_strips_trailing_slash() {
        let client = FunctionClient::new(&config("https://example.supabase.co/"));
        assert_eq!(
            client.function_url(COMPUTE_FAULT_LOCATION),
            "https://example.supabase.co/functions/v1/compute-fault-location"
        );
    }

    #[test]
    fn test_bearer_falls_back_to_anon_key() {
        let client = FunctionClient::new(&config("https://example.supabase.co"));
        assert_eq!(client.bearer(), "Bearer anon");
        assert_eq!(client.with_access_token("jwt").bearer(), "Bearer jwt");
    }

    #[test]
    fn test_request_body_field_names() {
        let body = ComputeLocationRequest {
            linea_id: "L-1",
            km: 3.5,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"lineaId": "L-1", "km": 3.5})
        );
    }

    #[test]
    fn test_message_from_json() {
        assert_eq!(message_from_json(&json!({"error": "bad km"})), "bad km");
        assert_eq!(
            message_from_json(&json!({"error": "", "message": "no linea"})),
            "no linea"
        );
        assert_eq!(message_from_json(&json!({"detail": 1})), r#"{"detail":1}"#);
        assert_eq!(
            message_from_json(&json!({"error": {"code": 7}})),
            r#"{"code":7}"#
        );
    }
}
