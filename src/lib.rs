//! # ecs-scale
//!
//! Bulk-registers Application Auto Scaling bounds for the ECS services of one
//! environment, e.g. to scale a staging environment down to zero overnight.
//!
//! ## How services are found
//!
//! - **Clusters**: every cluster whose ARN contains `-ENV` or `ENV-`
//! - **Services**: every service of those clusters, as `service/<cluster>/<service>`
//! - **Filters**: `--include`/`--exclude` match service names exactly and must
//!   name services that exist, otherwise nothing is scaled
//!
//! ## Example
//!
//! ```rust,no_run
//! use ecs_scale::platform::{AwsPlatform, CapacityBounds};
//! use ecs_scale::services::{ScalingExecutor, ServiceFilter, ServiceResolver};
//!
//! # async fn scale_down() -> ecs_scale::Result<()> {
//! let platform = AwsPlatform::load(None, None).await;
//! let filter = ServiceFilter::new(None, Some(vec!["db-migrator".to_string()]));
//! let services = ServiceResolver::new(&platform, "staging", filter).resolve().await?;
//! ScalingExecutor::new(&platform)
//!     .apply(&services, CapacityBounds::new(0, 0), &mut std::io::stdout())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod platform;
pub mod services;

// Re-export commonly used types and functions
pub use error::{ConfigError, Result, ScaleError};
pub use handlers::*;
pub use platform::{AwsPlatform, CapacityBounds, ContainerPlatform};
pub use services::{ScalingExecutor, ServiceFilter, ServiceResolver, ServiceTarget};
use cli::Cli;
use config::Config;
use std::io::Write;

/// Load configuration, connect to AWS and run the command line
pub async fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    let region = cli.region.clone().or_else(|| config.region.clone());
    let profile = cli.profile.clone().or_else(|| config.profile.clone());
    let platform = AwsPlatform::load(region, profile).await;

    execute(&cli, &config, &platform, &mut std::io::stdout()).await
}

/// Run the command line against an already-built platform
pub async fn execute<P: ContainerPlatform, W: Write>(
    cli: &Cli,
    config: &Config,
    platform: &P,
    out: &mut W,
) -> Result<()> {
    let resolver = ServiceResolver::new(platform, cli.env.clone(), cli.filter());

    if cli.list {
        handlers::handle_list(&resolver, out).await
    } else {
        let bounds = config.bounds(cli.min, cli.max);
        handlers::handle_scale(&resolver, platform, bounds, out).await
    }
}

/// Print a failed run's error and return the process exit code.
///
/// Filter validation failures go to `stdout` (with the rest of the run's
/// output); everything else goes to `stderr` prefixed with `Error:`.
pub fn report<O: Write, E: Write>(error: &ScaleError, stdout: &mut O, stderr: &mut E) -> i32 {
    let written = if error.is_validation() {
        writeln!(stdout, "{}", error)
    } else {
        writeln!(stderr, "Error: {}", error)
    };
    if let Err(e) = written {
        log::debug!("Could not print error: {}", e);
    }
    1
}
