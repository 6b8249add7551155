use crate::platform::CapacityBounds;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// AWS region (e.g., us-east-1, eu-west-1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// AWS profile name from ~/.aws/credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Default capacity bounds when `--min`/`--max` are not given
    #[serde(default)]
    pub capacity: CapacityConfig,
}

/// Capacity defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapacityConfig {
    #[serde(default = "default_min")]
    pub min: i32,
    #[serde(default = "default_max")]
    pub max: i32,
}

fn default_min() -> i32 {
    CapacityBounds::DEFAULT_MIN
}

fn default_max() -> i32 {
    CapacityBounds::DEFAULT_MAX
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
        }
    }
}

impl Config {
    /// Merge CLI overrides over the file values
    pub fn bounds(&self, min: Option<i32>, max: Option<i32>) -> CapacityBounds {
        CapacityBounds::new(
            min.unwrap_or(self.capacity.min),
            max.unwrap_or(self.capacity.max),
        )
    }
}
