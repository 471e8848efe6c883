use crate::domain::model::LocatedFault;
use crate::domain::ports::LocationService;
use crate::utils::error::Result;

pub struct FaultLocator<S: LocationService> {
    service: S,
}

impl<S: LocationService> FaultLocator<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Computes where a fault at `km` along `linea_id` sits and the WKT the
    /// fault's geometry column is updated with.
    pub async fn locate(&self, linea_id: &str, km: f64) -> Result<LocatedFault> {
        tracing::info!("Computing fault location for linea {} at km {}", linea_id, km);

        let location = self.service.compute_fault_location(linea_id, km).await?;
        let geom_wkt = location.to_wkt();

        tracing::info!("Fault located at lat {}, lon {}", location.lat, location.lon);

        Ok(LocatedFault {
            linea_id: linea_id.to_string(),
            km,
            location,
            geom_wkt,
        })
    }
}
