use crate::error::Result;
use crate::platform::{CapacityBounds, ContainerPlatform};
use crate::services::{ScalingExecutor, ServiceResolver};
use log::warn;
use std::io::Write;

/// Resolve the environment's services, then register `bounds` for each.
///
/// Filter validation happens during resolution, so a bad include/exclude
/// token never leaves the environment partially scaled.
pub async fn handle_scale<P: ContainerPlatform, W: Write>(
    resolver: &ServiceResolver<'_, P>,
    platform: &P,
    bounds: CapacityBounds,
    out: &mut W,
) -> Result<()> {
    let services = resolver.resolve().await?;
    if services.is_empty() {
        warn!("No services matched environment '{}'", resolver.env());
        return Ok(());
    }

    ScalingExecutor::new(platform)
        .apply(&services, bounds, out)
        .await
}
