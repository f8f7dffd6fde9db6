//! # storefront-e2e
//!
//! An end-to-end UI test suite for an e-commerce storefront, built on page
//! objects over the Chrome DevTools Protocol (CDP).
//!
//! ## Features
//!
//! - **Browser Session Management**: Launch Chrome/Chromium against a
//!   configured environment, with suite-wide timeouts and viewport
//! - **Page Objects**: Login, registration, contact, and shopping flows behind
//!   stable method-based interfaces with validated selector maps
//! - **Fluent Workflows**: Chainable `Result<&Self>` pipelines with explicit
//!   error propagation
//! - **Test Data**: Randomized, collision-resistant user records for
//!   registration scenarios
//!
//! ## Running the suite
//!
//! Unit tests run anywhere; the browser-driven scenarios under `tests/` need
//! an installed Chrome and network access and are ignored by default:
//!
//! ```bash
//! # Pure tests only
//! cargo test
//!
//! # Full suite against the dev environment
//! cargo test -- --ignored
//!
//! # Against another environment
//! STOREFRONT_ENV=staging cargo test -- --ignored
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use storefront_e2e::{Environment, LaunchOptions, Session, SuiteConfig};
//! use storefront_e2e::pages::LoginPage;
//!
//! # fn main() -> storefront_e2e::Result<()> {
//! let profile = Environment::Dev.profile();
//! let suite = SuiteConfig::default();
//! let session = Session::launch(&profile, &suite, LaunchOptions::default())?;
//!
//! let login = LoginPage::new(&session)?;
//! login.visit()?.login("someuser", "somepassword")?;
//! session.assert_url_contains("account/account")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser session management and launch configuration
//! - [`config`]: Environment profiles and suite-wide settings
//! - [`pages`]: Page objects and the shared interaction primitives
//! - [`data`]: Test data generation
//! - [`error`]: Error types and result alias

pub mod browser;
pub mod config;
pub mod data;
pub mod error;
pub mod pages;

pub use browser::{LaunchOptions, Session};
pub use config::{EnvProfile, Environment, ExecutionMode, SuiteConfig};
pub use data::{UserRecord, random_email, random_number, random_string, user_data};
pub use error::{Result, SuiteError};
pub use pages::{BasePage, ContactForm, ContactUsPage, LoginPage, RegisterPage, SelectorMap, ShoppingPage};
