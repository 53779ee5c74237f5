//! Canonical test configurations.

use std::path::Path;

use crate::domain::UserId;
use crate::infrastructure::config::settings::Config;

/// Defaults with a fixed sampling seed so recommendation rows are stable.
pub fn seeded(seed: u64) -> Config {
    let mut config = Config::default();
    config.recommendation.seed = Some(seed);
    config
}

/// Seeded config reading `seed_path` and acting as `user`.
pub fn with_store(seed_path: &Path, user: Option<&str>) -> Config {
    let mut config = seeded(7);
    config.store.seed_path = Some(seed_path.to_path_buf());
    config.session.user_id = user.map(UserId::from);
    config
}
