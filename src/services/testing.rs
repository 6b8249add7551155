//! In-memory [`ContainerPlatform`] for unit tests

use crate::platform::{ContainerPlatform, PlatformError, Result, ScalingRequest};
use std::sync::Mutex;

#[derive(Default)]
pub struct FakePlatform {
    clusters: Vec<(String, Vec<String>)>,
    failing_cluster: Option<String>,
    failing_resource: Option<String>,
    service_listings: Mutex<Vec<String>>,
    registrations: Mutex<Vec<ScalingRequest>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster(mut self, cluster: &str, services: &[&str]) -> Self {
        self.clusters.push((
            cluster.to_string(),
            services.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// `list_services` fails for this cluster
    pub fn failing_services(mut self, cluster: &str) -> Self {
        self.failing_cluster = Some(cluster.to_string());
        self
    }

    /// `register_scalable_target` fails for this resource id
    pub fn failing_registration(mut self, resource_id: &str) -> Self {
        self.failing_resource = Some(resource_id.to_string());
        self
    }

    pub fn service_listings(&self) -> Vec<String> {
        self.service_listings.lock().unwrap().clone()
    }

    pub fn registrations(&self) -> Vec<ScalingRequest> {
        self.registrations.lock().unwrap().clone()
    }
}

impl ContainerPlatform for FakePlatform {
    async fn list_clusters(&self) -> Result<Vec<String>> {
        Ok(self.clusters.iter().map(|(c, _)| c.clone()).collect())
    }

    async fn list_services(&self, cluster: &str) -> Result<Vec<String>> {
        self.service_listings.lock().unwrap().push(cluster.to_string());
        if self.failing_cluster.as_deref() == Some(cluster) {
            return Err(PlatformError::Api {
                operation: "ListServices",
                message: "ThrottlingException".to_string(),
            });
        }
        Ok(self
            .clusters
            .iter()
            .find(|(c, _)| c == cluster)
            .map(|(_, services)| services.clone())
            .unwrap_or_default())
    }

    async fn register_scalable_target(&self, request: &ScalingRequest) -> Result<()> {
        if self.failing_resource.as_deref() == Some(request.resource_id.as_str()) {
            return Err(PlatformError::Api {
                operation: "RegisterScalableTarget",
                message: "AccessDeniedException".to_string(),
            });
        }
        self.registrations.lock().unwrap().push(request.clone());
        Ok(())
    }
}
