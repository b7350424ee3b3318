use anyhow::Context;
use hr_config::HrConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<HrConfig> {
    let mut config = HrConfig::load_with_dotenv().context("failed to load hrlens configuration")?;
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
    tracing::debug!(store = %config.database.path, cache = config.cache.enabled, "configuration loaded");
    Ok(config)
}
