use crate::services::ServiceFilter;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ecs-scale")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Set autoscaling min/max for every ECS service of an environment")]
#[command(long_about = "Finds the ECS clusters of an environment (cluster names containing -ENV or ENV-), \
lists their services, optionally narrows them with --include/--exclude, and registers the given \
min/max capacity with Application Auto Scaling for each one.")]
pub struct Cli {
    /// Environment (for filtering clusters -ENV or ENV-)
    #[arg(value_name = "ENV")]
    pub env: String,

    /// List matched services instead of scaling them
    #[arg(short, long, overrides_with = "no_list")]
    pub list: bool,

    /// Scale matched services (default)
    #[arg(long = "no-list", overrides_with = "list")]
    pub no_list: bool,

    /// Service name to include. Can be passed multiple times. All if none given.
    #[arg(short, long, value_name = "SERVICE")]
    pub include: Vec<String>,

    /// Service name to exclude. Can be passed multiple times.
    #[arg(short, long, value_name = "SERVICE")]
    pub exclude: Vec<String>,

    /// Minimum capacity [default: 1]
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub min: Option<i32>,

    /// Maximum capacity [default: 2]
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub max: Option<i32>,

    /// AWS region (defaults to the AWS provider chain)
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// AWS profile name from ~/.aws/credentials
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", env = "ECS_SCALE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Include/exclude lists as a resolver filter
    pub fn filter(&self) -> ServiceFilter {
        ServiceFilter::new(Some(self.include.clone()), Some(self.exclude.clone()))
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
