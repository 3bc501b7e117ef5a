use ferrous_rdns_domain::{ResolverSet, RunConfig};
use tracing::{error, info, warn};

/// Builds the run's resolver set once, before any worker starts.
///
/// An unreadable resolvers file is reported and dropped; the single resolver
/// (if any) is still used.
pub fn load_resolver_set(config: &RunConfig) -> ResolverSet {
    let mut set = ResolverSet::with_single(config.resolver.as_ref().map(|r| r.as_str()));

    if let Some(path) = &config.resolvers_file {
        match set.extend_from_file(path) {
            Ok(loaded) => {
                info!(path = %path.display(), loaded, "Resolvers file loaded");
            }
            Err(e) => {
                error!(error = %e, "Resolvers file unavailable, continuing without it");
            }
        }
    }

    if set.is_empty() {
        warn!("No resolvers configured, no lookups will be performed");
    }

    set
}
