use crate::error::Result;
use crate::platform::ContainerPlatform;
use crate::services::ServiceResolver;
use std::io::Write;

/// Print the resolved services without scaling anything
pub async fn handle_list<P: ContainerPlatform, W: Write>(
    resolver: &ServiceResolver<'_, P>,
    out: &mut W,
) -> Result<()> {
    let services = resolver.resolve().await?;

    writeln!(out, "matched services:")?;
    for service in &services {
        writeln!(out, "\t{}", service)?;
    }

    Ok(())
}
