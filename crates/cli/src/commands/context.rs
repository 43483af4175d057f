//! Wiring of config, entity client and providers

use anyhow::Context;
use authz::{FieldResolverFactory, GroupMembershipFieldResolverProvider};
use entity::InMemoryEntityClient;
use shared::AuthorizerConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Load the config (if any) and build a factory backed by the in-memory client
///
/// `fixtures` overrides the config's `entityFixtures`. A relative
/// `entityFixtures` path is taken relative to the config file.
pub fn build_factory(config_path: Option<&Path>, fixtures: Option<&Path>) -> anyhow::Result<FieldResolverFactory> {
    let config = match config_path {
        Some(path) => AuthorizerConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AuthorizerConfig::default(),
    };

    let fixtures: Option<PathBuf> = match fixtures {
        Some(path) => Some(path.to_path_buf()),
        None => config.entity_fixtures.as_ref().map(|path| {
            match config_path.and_then(Path::parent) {
                Some(base) if path.is_relative() => base.join(path),
                _ => path.clone(),
            }
        }),
    };

    let client = InMemoryEntityClient::new();
    if let Some(path) = &fixtures {
        let count = client
            .load_fixtures(path)
            .with_context(|| format!("Failed to load entity fixtures from {}", path.display()))?;
        info!(count, "Entity fixtures loaded");
    }

    let authentication = Arc::new(config.system_authentication());
    let factory = FieldResolverFactory::new().with_provider(Arc::new(
        GroupMembershipFieldResolverProvider::new(Arc::new(client), authentication),
    ));
    Ok(factory)
}
