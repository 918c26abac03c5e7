//! Build information captured at compile time.

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short git commit hash, or "unknown" outside a checkout.
pub const BUILD_HASH: &str = env!("BUILD_HASH");

const BUILD_DIRTY: &str = env!("BUILD_DIRTY");

fn is_dirty() -> bool {
    BUILD_DIRTY == "true"
}

fn hash_marker() -> String {
    if is_dirty() {
        format!("{BUILD_HASH}*")
    } else {
        BUILD_HASH.to_string()
    }
}

/// Full version string for logs, e.g. `0.3.0 (abc1234)`; a `*` marks a dirty tree.
#[must_use]
pub fn version_string() -> String {
    format!("{VERSION} ({})", hash_marker())
}

/// Short form for the brochure footer, e.g. `v0.3.0·abc1234`.
#[must_use]
pub fn short_version() -> String {
    format!("v{VERSION}·{}", hash_marker())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_package_version() {
        assert!(version_string().starts_with(VERSION));
        assert!(version_string().contains(BUILD_HASH));
    }

    #[test]
    fn short_version_is_prefixed() {
        assert!(short_version().starts_with('v'));
    }
}
