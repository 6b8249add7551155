use super::target::ServiceTarget;
use crate::error::Result;
use crate::platform::{CapacityBounds, ContainerPlatform, ScalingRequest};
use log::info;
use std::io::Write;

/// Registers autoscaling bounds for resolved services.
///
/// Requests go out one by one in target order. The first failure stops the
/// batch; targets registered before it stay registered.
pub struct ScalingExecutor<'a, P> {
    platform: &'a P,
}

impl<'a, P: ContainerPlatform> ScalingExecutor<'a, P> {
    pub fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    /// Register `bounds` for every target, printing one progress line per target to `out`
    pub async fn apply<W: Write>(
        &self,
        targets: &[ServiceTarget],
        bounds: CapacityBounds,
        out: &mut W,
    ) -> Result<()> {
        for target in targets {
            let resource_id = target.resource_id();
            writeln!(out, "{}: scale to {}", resource_id, bounds)?;
            info!("Registering scalable target {} with bounds {}", resource_id, bounds);

            let request = ScalingRequest::ecs_service(resource_id, bounds);
            self.platform.register_scalable_target(&request).await?;
        }
        Ok(())
    }
}
