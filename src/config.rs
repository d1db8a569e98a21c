//! Build-time configuration.
//!
//! The only configurable value is the version string, injected at compile
//! time through the `COBRA_EXAMPLE_VERSION` environment variable:
//!
//! ```text
//! COBRA_EXAMPLE_VERSION=1.2.3 cargo build --release
//! ```
//!
//! When the variable is not set at build time the version is empty.

/// Configuration handed to the command dispatcher.
///
/// Constructed once before dispatch and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    version: String,
}

impl AppConfig {
    /// Configuration baked in at build time.
    pub fn from_build_env() -> Self {
        Self {
            version: option_env!("COBRA_EXAMPLE_VERSION")
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Configuration with an explicit version.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// The version string. Empty when none was configured.
    pub fn version(&self) -> &str {
        &self.version
    }
}
