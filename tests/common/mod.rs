//! Shared harness for the browser-driven scenarios
//!
//! Resolves the target environment once per process, launches a fresh session
//! per test attempt, and implements whole-test retries: a failed primitive
//! fails the attempt immediately and the harness reruns the entire closure,
//! capturing a failure screenshot on each failed attempt.

// Each test binary uses its own slice of the harness.
#![allow(dead_code)]

use serde::Deserialize;
use storefront_e2e::pages::ContactForm;
use storefront_e2e::{Environment, ExecutionMode, LaunchOptions, Session, SuiteConfig, UserRecord, config};

/// Named records from tests/fixtures/test_users.json
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestUsers {
    pub valid_user: Credentials,
    pub invalid_user: InvalidUser,
    pub new_user: UserRecord,
    pub contact_form: ContactForm,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub loginname: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct InvalidUser {
    pub email: String,
    pub password: String,
}

/// Initialize logging once per test binary
pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse the shared fixture file
pub fn load_users() -> TestUsers {
    serde_json::from_str(include_str!("../fixtures/test_users.json")).expect("test_users.json is malformed")
}

/// Suite settings with the environment's timeout applied
pub fn suite_config() -> SuiteConfig {
    let mut suite = SuiteConfig::default();
    suite.command_timeout = environment().profile().timeout;
    suite
}

/// The environment this run targets, resolved from STOREFRONT_ENV
pub fn environment() -> Environment {
    let name = std::env::var(config::ENV_VAR).ok();
    Environment::from_name(name.as_deref())
}

/// Unattended on CI, interactive otherwise
pub fn execution_mode() -> ExecutionMode {
    if std::env::var_os("CI").is_some() {
        ExecutionMode::Unattended
    } else {
        ExecutionMode::Interactive
    }
}

/// Launch a fresh headless session for one test attempt
pub fn launch(suite: &SuiteConfig) -> anyhow::Result<Session> {
    let profile = environment().profile();
    let options = LaunchOptions::new().headless(true).window_size(suite.viewport.0, suite.viewport.1);
    Ok(Session::launch(&profile, suite, options)?)
}

/// Run a test body with whole-test retries
///
/// Every attempt gets its own browser session, so a retried test starts from
/// the same blank state as a first run. Retry counts come from the execution
/// mode; interactive runs fail on the first attempt.
pub fn run_with_retries<F>(name: &str, test: F) -> anyhow::Result<()>
where
    F: Fn(&Session) -> storefront_e2e::Result<()>,
{
    init();
    let suite = suite_config();
    let retries = suite.retries_for(execution_mode());

    let mut attempt = 0;
    loop {
        let session = launch(&suite)?;
        match test(&session) {
            Ok(()) => return Ok(()),
            Err(err) => {
                if suite.screenshot_on_failure {
                    let _ = session.screenshot(&format!("{}-attempt{}", name, attempt + 1));
                }
                if attempt >= retries {
                    return Err(err.into());
                }
                log::warn!("test '{}' failed on attempt {}: {}; retrying", name, attempt + 1, err);
                attempt += 1;
            }
        }
    }
}
