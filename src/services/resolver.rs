//! Environment service discovery and filtering
//!
//! Resolution is a single pass:
//!
//! ```text
//! clusters  = list_clusters() where "-<env>" or "<env>-" in arn
//! targets   = for cluster in clusters: for arn in list_services(cluster): (cluster, arn)
//! universe  = sorted short names of targets      (before any filtering)
//! targets   = include-filter(targets, universe)  (validated against universe)
//! targets   = exclude-filter(targets, universe)  (validated against universe)
//! ```
//!
//! Both filters validate every token against the full, unfiltered universe so a
//! typo fails the run before any scaling call is made.

use super::target::{matches_environment, ServiceTarget};
use crate::error::{Result, ScaleError};
use crate::platform::ContainerPlatform;
use log::{debug, info};

/// Short-name allow/deny lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceFilter {
    /// Keep only these services. `None` or empty keeps everything.
    pub include: Option<Vec<String>>,
    /// Drop these services
    pub exclude: Vec<String>,
}

impl ServiceFilter {
    pub fn new(include: Option<Vec<String>>, exclude: Option<Vec<String>>) -> Self {
        Self {
            include: include.filter(|tokens| !tokens.is_empty()),
            exclude: exclude.unwrap_or_default(),
        }
    }

    fn apply(&self, targets: Vec<ServiceTarget>, universe: &[String]) -> Result<Vec<ServiceTarget>> {
        let targets = match &self.include {
            Some(include) => {
                validate(include, universe, |token| ScaleError::IncludeNotFound {
                    token,
                    universe: universe.to_vec(),
                })?;
                targets
                    .into_iter()
                    .filter(|t| include.iter().any(|name| name == t.short_name()))
                    .collect()
            }
            None => targets,
        };

        validate(&self.exclude, universe, |token| ScaleError::ExcludeNotFound {
            token,
            universe: universe.to_vec(),
        })?;
        Ok(targets
            .into_iter()
            .filter(|t| !self.exclude.iter().any(|name| name == t.short_name()))
            .collect())
    }
}

fn validate(
    tokens: &[String],
    universe: &[String],
    not_found: impl Fn(String) -> ScaleError,
) -> Result<()> {
    match tokens.iter().find(|token| !universe.contains(*token)) {
        Some(token) => Err(not_found(token.clone())),
        None => Ok(()),
    }
}

/// Resolves an environment token into the ECS services to scale
pub struct ServiceResolver<'a, P> {
    platform: &'a P,
    env: String,
    filter: ServiceFilter,
}

impl<'a, P: ContainerPlatform> ServiceResolver<'a, P> {
    pub fn new(platform: &'a P, env: impl Into<String>, filter: ServiceFilter) -> Self {
        Self {
            platform,
            env: env.into(),
            filter,
        }
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    /// Cluster ARNs belonging to the environment, in listing order
    pub async fn clusters(&self) -> Result<Vec<String>> {
        let clusters: Vec<String> = self
            .platform
            .list_clusters()
            .await?
            .into_iter()
            .filter(|arn| matches_environment(arn, &self.env))
            .collect();
        debug!("Clusters matching '{}': {:?}", self.env, clusters);
        Ok(clusters)
    }

    /// Every service of every matching cluster, before filtering
    pub async fn discover(&self) -> Result<Vec<ServiceTarget>> {
        let mut targets = Vec::new();
        for cluster in self.clusters().await? {
            for arn in self.platform.list_services(&cluster).await? {
                targets.push(ServiceTarget::from_arns(&cluster, &arn)?);
            }
        }
        Ok(targets)
    }

    /// Discover, then apply include/exclude filters.
    ///
    /// Output order follows cluster listing order, then service listing order.
    pub async fn resolve(&self) -> Result<Vec<ServiceTarget>> {
        let targets = self.discover().await?;
        let universe = name_universe(&targets);
        debug!("Service name universe: {:?}", universe);

        let resolved = self.filter.apply(targets, &universe)?;
        info!(
            "Resolved {} of {} service(s) for environment '{}'",
            resolved.len(),
            universe.len(),
            self.env
        );
        Ok(resolved)
    }
}

/// Sorted short names of all discovered services
pub fn name_universe(targets: &[ServiceTarget]) -> Vec<String> {
    let mut names: Vec<String> = targets.iter().map(|t| t.short_name().to_string()).collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakePlatform;

    fn staging_platform() -> FakePlatform {
        FakePlatform::new()
            .with_cluster("arn:aws:ecs:eu-west-1:1:cluster/prod-a", &["arn:aws:ecs:eu-west-1:1:service/prod-a/svcP"])
            .with_cluster("arn:aws:ecs:eu-west-1:1:cluster/staging-x", &["arn:aws:ecs:eu-west-1:1:service/staging-x/svcA"])
            .with_cluster("arn:aws:ecs:eu-west-1:1:cluster/staging-y", &["arn:aws:ecs:eu-west-1:1:service/svcB"])
    }

    fn ids(targets: &[ServiceTarget]) -> Vec<String> {
        targets.iter().map(ServiceTarget::resource_id).collect()
    }

    #[tokio::test]
    async fn test_clusters_matching_environment() {
        let platform = FakePlatform::new()
            .with_cluster("prod-a", &[])
            .with_cluster("staging-x", &[])
            .with_cluster("staging-y", &[]);
        let resolver = ServiceResolver::new(&platform, "staging", ServiceFilter::default());
        assert_eq!(resolver.clusters().await.unwrap(), vec!["staging-x", "staging-y"]);
    }

    #[tokio::test]
    async fn test_resolve_all_in_listing_order() {
        let platform = staging_platform();
        let resolver = ServiceResolver::new(&platform, "staging", ServiceFilter::default());
        let targets = resolver.resolve().await.unwrap();
        assert_eq!(ids(&targets), vec!["service/staging-x/svcA", "service/staging-y/svcB"]);
        // Non-matching clusters are never asked for their services
        assert_eq!(platform.service_listings(), vec!["arn:aws:ecs:eu-west-1:1:cluster/staging-x", "arn:aws:ecs:eu-west-1:1:cluster/staging-y"]);
    }

    #[tokio::test]
    async fn test_order_is_listing_order_not_sorted() {
        let platform = FakePlatform::new()
            .with_cluster("c/dev-b", &["s/zeta", "s/alpha"])
            .with_cluster("c/dev-a", &["s/mid"]);
        let resolver = ServiceResolver::new(&platform, "dev", ServiceFilter::default());
        let targets = resolver.resolve().await.unwrap();
        assert_eq!(
            ids(&targets),
            vec!["service/dev-b/zeta", "service/dev-b/alpha", "service/dev-a/mid"]
        );
        assert_eq!(name_universe(&targets), vec!["alpha", "mid", "zeta"]);
    }

    #[tokio::test]
    async fn test_resolve_is_repeatable() {
        let platform = staging_platform();
        let resolver = ServiceResolver::new(&platform, "staging", ServiceFilter::default());
        let first = resolver.resolve().await.unwrap();
        let second = resolver.resolve().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_include_fails_with_universe() {
        let platform = staging_platform();
        let filter = ServiceFilter::new(Some(vec!["svcC".to_string()]), None);
        let resolver = ServiceResolver::new(&platform, "staging", filter);
        let err = resolver.resolve().await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "include: svcC not found in [svcA, svcB]");
    }

    #[tokio::test]
    async fn test_include_keeps_exact_matches_only() {
        let platform = FakePlatform::new()
            .with_cluster("c/qa-1", &["s/api", "s/api-worker", "s/web"]);
        let filter = ServiceFilter::new(Some(vec!["api".to_string(), "web".to_string()]), None);
        let resolver = ServiceResolver::new(&platform, "qa", filter);
        let targets = resolver.resolve().await.unwrap();
        assert_eq!(ids(&targets), vec!["service/qa-1/api", "service/qa-1/web"]);
    }

    #[tokio::test]
    async fn test_exclude_without_include() {
        let platform = staging_platform();
        let filter = ServiceFilter::new(None, Some(vec!["svcA".to_string()]));
        let resolver = ServiceResolver::new(&platform, "staging", filter);
        let targets = resolver.resolve().await.unwrap();
        assert_eq!(ids(&targets), vec!["service/staging-y/svcB"]);
    }

    #[tokio::test]
    async fn test_exclude_validated_against_full_universe() {
        // svcA is removed by include first, excluding it again must still validate
        let platform = staging_platform();
        let filter = ServiceFilter::new(
            Some(vec!["svcB".to_string()]),
            Some(vec!["svcA".to_string()]),
        );
        let resolver = ServiceResolver::new(&platform, "staging", filter);
        let targets = resolver.resolve().await.unwrap();
        assert_eq!(ids(&targets), vec!["service/staging-y/svcB"]);
    }

    #[tokio::test]
    async fn test_unknown_exclude_fails() {
        let platform = staging_platform();
        let filter = ServiceFilter::new(
            Some(vec!["svcA".to_string()]),
            Some(vec!["svcZ".to_string()]),
        );
        let resolver = ServiceResolver::new(&platform, "staging", filter);
        let err = resolver.resolve().await.unwrap_err();
        assert!(matches!(err, ScaleError::ExcludeNotFound { ref token, .. } if token == "svcZ"));
    }

    #[tokio::test]
    async fn test_no_matching_cluster() {
        let platform = staging_platform();
        let resolver = ServiceResolver::new(&platform, "qa", ServiceFilter::default());
        assert!(resolver.resolve().await.unwrap().is_empty());

        let filter = ServiceFilter::new(None, Some(vec!["svcA".to_string()]));
        let resolver = ServiceResolver::new(&platform, "qa", filter);
        let err = resolver.resolve().await.unwrap_err();
        assert_eq!(err.to_string(), "exclude: svcA not found in []");
    }

    #[tokio::test]
    async fn test_empty_include_means_all() {
        let platform = staging_platform();
        let filter = ServiceFilter::new(Some(Vec::new()), Some(Vec::new()));
        assert_eq!(filter, ServiceFilter::default());
        let resolver = ServiceResolver::new(&platform, "staging", filter);
        assert_eq!(resolver.resolve().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_platform_error_propagates() {
        let platform = staging_platform().failing_services("arn:aws:ecs:eu-west-1:1:cluster/staging-y");
        let resolver = ServiceResolver::new(&platform, "staging", ServiceFilter::default());
        let err = resolver.resolve().await.unwrap_err();
        assert!(matches!(err, ScaleError::Platform(_)));
    }

    #[tokio::test]
    async fn test_malformed_service_arn_is_fatal() {
        let platform = FakePlatform::new().with_cluster("c/dev-a", &["bare-name"]);
        let resolver = ServiceResolver::new(&platform, "dev", ServiceFilter::default());
        let err = resolver.resolve().await.unwrap_err();
        assert!(matches!(err, ScaleError::MalformedIdentifier(_)));
    }
}
