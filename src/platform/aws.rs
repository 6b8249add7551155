//! AWS implementation of [`ContainerPlatform`]
//!
//! Discovery goes through ECS, registration through Application Auto Scaling.
//! Both clients are built once from a single `SdkConfig` and reused for every
//! call of the run.

use super::error::{PlatformError, Result};
use super::{ContainerPlatform, ScalingRequest};
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_applicationautoscaling::types::{ScalableDimension, ServiceNamespace};
use log::debug;

/// Largest page the ECS list APIs hand out. Only the first page is read.
const LIST_PAGE_SIZE: i32 = 100;

/// ECS + Application Auto Scaling clients sharing one credential/region setup
#[derive(Debug, Clone)]
pub struct AwsPlatform {
    ecs: aws_sdk_ecs::Client,
    autoscaling: aws_sdk_applicationautoscaling::Client,
}

impl AwsPlatform {
    /// Load the default credential/region chain, with optional overrides
    pub async fn load(region: Option<String>, profile: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            debug!("Using AWS region override: {}", region);
            loader = loader.region(Region::new(region));
        }
        if let Some(profile) = profile {
            debug!("Using AWS profile: {}", profile);
            loader = loader.profile_name(profile);
        }
        Self::from_conf(&loader.load().await)
    }

    /// Build both clients from an existing SDK configuration
    pub fn from_conf(config: &SdkConfig) -> Self {
        Self {
            ecs: aws_sdk_ecs::Client::new(config),
            autoscaling: aws_sdk_applicationautoscaling::Client::new(config),
        }
    }
}

impl ContainerPlatform for AwsPlatform {
    async fn list_clusters(&self) -> Result<Vec<String>> {
        let output = self
            .ecs
            .list_clusters()
            .max_results(LIST_PAGE_SIZE)
            .send()
            .await
            .map_err(|e| PlatformError::api("ListClusters", e))?;

        Ok(output.cluster_arns().to_vec())
    }

    async fn list_services(&self, cluster: &str) -> Result<Vec<String>> {
        let output = self
            .ecs
            .list_services()
            .cluster(cluster)
            .max_results(LIST_PAGE_SIZE)
            .send()
            .await
            .map_err(|e| PlatformError::api("ListServices", e))?;

        Ok(output.service_arns().to_vec())
    }

    async fn register_scalable_target(&self, request: &ScalingRequest) -> Result<()> {
        self.autoscaling
            .register_scalable_target()
            .service_namespace(ServiceNamespace::from(request.namespace))
            .resource_id(&request.resource_id)
            .scalable_dimension(ScalableDimension::from(request.dimension))
            .min_capacity(request.bounds.min)
            .max_capacity(request.bounds.max)
            .send()
            .await
            .map_err(|e| PlatformError::api("RegisterScalableTarget", e))?;

        Ok(())
    }
}
