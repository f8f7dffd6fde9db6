//! Suite configuration
//!
//! Environment profiles (which deployment of the store to test against) and
//! suite-wide settings (viewport, timeouts, retry counts per execution mode).
//! Resolution is explicit: the harness reads the `STOREFRONT_ENV` variable once
//! at startup and passes the name in, nothing in this module consults ambient
//! process state on its own.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Name of the environment variable the test harness reads at startup
pub const ENV_VAR: &str = "STOREFRONT_ENV";

/// Deployment environment the suite runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Staging,
    Production,
}

impl Environment {
    /// Resolve an environment from its name.
    ///
    /// Unknown or absent names fall back to `Dev`.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("staging") => Self::Staging,
            Some("production") => Self::Production,
            _ => Self::Dev,
        }
    }

    /// Settings for this environment
    pub fn profile(self) -> EnvProfile {
        match self {
            Self::Dev => EnvProfile {
                base_url: "https://automationteststore.com/".to_string(),
                api_url: "https://automationteststore.com/api/".to_string(),
                timeout: Duration::from_secs(10),
            },
            Self::Staging => EnvProfile {
                base_url: "https://automationteststore.com/".to_string(),
                api_url: "https://automationteststore.com/api/".to_string(),
                timeout: Duration::from_secs(15),
            },
            Self::Production => EnvProfile {
                base_url: "https://automationteststore.com/".to_string(),
                api_url: "https://automationteststore.com/api/".to_string(),
                timeout: Duration::from_secs(20),
            },
        }
    }
}

/// Environment-specific endpoints and timeout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvProfile {
    pub base_url: String,
    pub api_url: String,
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

/// How the suite is being executed, which governs whole-test retry counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Non-interactive batch run (CI)
    Unattended,
    /// Developer-driven run, failures surface immediately
    Interactive,
}

/// Suite-wide settings shared by every test
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Browser viewport, width x height
    pub viewport: (u32, u32),

    /// How long locate and assert operations poll before failing
    pub command_timeout: Duration,

    /// How long a navigation may take before it fails the test
    pub page_load_timeout: Duration,

    /// Whole-test retry count per execution mode
    pub retries_unattended: u32,
    pub retries_interactive: u32,

    /// Capture a screenshot when a test fails
    pub screenshot_on_failure: bool,

    /// Where failure and on-demand screenshots are written
    pub screenshot_dir: PathBuf,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            viewport: (1280, 720),
            command_timeout: Duration::from_secs(10),
            page_load_timeout: Duration::from_secs(60),
            retries_unattended: 2,
            retries_interactive: 0,
            screenshot_on_failure: true,
            screenshot_dir: PathBuf::from("target/screenshots"),
        }
    }
}

impl SuiteConfig {
    /// Retry count for the given execution mode.
    ///
    /// Retries apply to whole test cases: a failed primitive fails the test
    /// immediately and the harness reruns the test from the top.
    pub fn retries_for(&self, mode: ExecutionMode) -> u32 {
        match mode {
            ExecutionMode::Unattended => self.retries_unattended,
            ExecutionMode::Interactive => self.retries_interactive,
        }
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}
