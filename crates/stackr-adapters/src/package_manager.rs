//! Package-manager detection from the invoking tool's user agent.
//!
//! npm, pnpm and bun all export `npm_config_user_agent` to the scripts and
//! binaries they launch, e.g. `pnpm/9.1.0 npm/? node/v20.11.0 linux x64`.

use stackr_core::domain::PackageManager;
use tracing::debug;

/// Environment variable carrying the user agent.
pub const USER_AGENT_VAR: &str = "npm_config_user_agent";

/// Map a user agent to a package manager. Anything unrecognised is npm.
pub fn detect_package_manager(user_agent: Option<&str>) -> PackageManager {
    match user_agent {
        Some(ua) if ua.starts_with("pnpm") => PackageManager::Pnpm,
        Some(ua) if ua.starts_with("bun") => PackageManager::Bun,
        _ => PackageManager::Npm,
    }
}

/// Detect from the environment. `None` when the variable is unset, so the
/// caller's configured default stays in charge.
pub fn detect_from_env() -> Option<PackageManager> {
    let ua = std::env::var(USER_AGENT_VAR).ok()?;
    let pm = detect_package_manager(Some(&ua));
    debug!(user_agent = %ua, package_manager = %pm, "Detected package manager");
    Some(pm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recognises_pnpm_and_bun() {
        assert_eq!(
            detect_package_manager(Some("pnpm/9.1.0 npm/? node/v20.11.0 linux x64")),
            PackageManager::Pnpm
        );
        assert_eq!(
            detect_package_manager(Some("bun/1.1.8 npm/? node/v21.6.0 linux x64")),
            PackageManager::Bun
        );
    }

    #[test]
    fn falls_back_to_npm() {
        assert_eq!(
            detect_package_manager(Some("npm/10.2.4 node/v20.11.0 darwin arm64")),
            PackageManager::Npm
        );
        assert_eq!(
            detect_package_manager(Some("yarn/1.22.19")),
            PackageManager::Npm
        );
        assert_eq!(detect_package_manager(None), PackageManager::Npm);
    }
}
