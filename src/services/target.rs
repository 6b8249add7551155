//! Composite service identifiers
//!
//! ECS `ListServices` returns service ARNs that are sometimes qualified with
//! the cluster name and sometimes not, so the Application Auto Scaling
//! resource id (`service/<cluster>/<service>`) is always rebuilt from the
//! cluster ARN and the service ARN rather than split out of the service ARN.

use crate::error::{Result, ScaleError};
use std::fmt;

/// True if `cluster` belongs to `env`: contains `-<env>` or `<env>-`.
///
/// This is plain substring containment, not segment matching.
pub fn matches_environment(cluster: &str, env: &str) -> bool {
    cluster.contains(&format!("-{env}")) || cluster.contains(&format!("{env}-"))
}

/// A scalable ECS service, identified by cluster and service short names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceTarget {
    cluster: String,
    service: String,
}

impl ServiceTarget {
    /// Build from the cluster ARN and service ARN returned by the listing APIs
    pub fn from_arns(cluster_arn: &str, service_arn: &str) -> Result<Self> {
        Ok(Self {
            cluster: tail(cluster_arn)?.to_string(),
            service: tail(service_arn)?.to_string(),
        })
    }

    /// Cluster short name
    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    /// Service short name; what `--include`/`--exclude` tokens match against
    pub fn short_name(&self) -> &str {
        &self.service
    }

    /// `service/<cluster>/<service>`
    pub fn resource_id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ServiceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "service/{}/{}", self.cluster, self.service)
    }
}

fn tail(arn: &str) -> Result<&str> {
    arn.rsplit_once('/')
        .map(|(_, tail)| tail)
        .ok_or_else(|| ScaleError::MalformedIdentifier(arn.to_string()))
}
