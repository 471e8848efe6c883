use crate::domain::model::Location;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    /// Base URL of the backend service, without trailing path.
    fn service_url(&self) -> &str;
    /// Public key sent as `apikey` and as the fallback bearer token.
    fn anon_key(&self) -> &str;
    /// Session token of the signed-in user, if any.
    fn access_token(&self) -> Option<&str>;
}

#[async_trait]
pub trait LocationService: Send + Sync {
    async fn compute_fault_location(&self, linea_id: &str, km: f64) -> Result<Location>;
}
