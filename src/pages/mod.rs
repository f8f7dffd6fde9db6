//! Page objects
//!
//! Each page of the store is wrapped behind a stable, method-based interface so
//! tests never touch raw selectors. Pages compose [`BasePage`], which carries
//! the shared interaction primitives; workflow methods return `Result<&Self>`
//! so scenarios chain as pipelines:
//!
//! ```rust,no_run
//! # use storefront_e2e::{Session, pages::LoginPage};
//! # fn demo(session: &Session) -> storefront_e2e::Result<()> {
//! let login = LoginPage::new(session)?;
//! login.visit()?.login("someuser", "somepassword")?;
//! session.assert_url_contains("account/account")?;
//! # Ok(())
//! # }
//! ```

pub mod contact;
pub mod login;
pub mod register;
pub mod selectors;
pub mod shopping;

pub use contact::{ContactForm, ContactUsPage};
pub use login::LoginPage;
pub use register::RegisterPage;
pub use selectors::SelectorMap;
pub use shopping::ShoppingPage;

use crate::browser::Session;
use crate::error::Result;
use headless_chrome::Element;
use std::path::PathBuf;
use std::time::Duration;

/// Shared capability set every page object composes
///
/// A thin borrow of the per-test [`Session`]; holds no state of its own.
#[derive(Clone, Copy)]
pub struct BasePage<'s> {
    session: &'s Session,
}

impl<'s> BasePage<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self { session }
    }

    /// The session this page drives
    pub fn session(&self) -> &'s Session {
        self.session
    }

    /// Navigate to a path relative to the base URL
    pub fn visit(&self, path: &str) -> Result<&Self> {
        self.session.visit(path)?;
        Ok(self)
    }

    /// Locate an element, waiting up to the command timeout
    pub fn find(&self, selector: &str) -> Result<Element<'s>> {
        self.session.find(selector)
    }

    /// Locate an element with a caller-supplied timeout
    pub fn find_with_timeout(&self, selector: &str, timeout: Duration) -> Result<Element<'s>> {
        self.session.find_with_timeout(selector, timeout)
    }

    /// Click an element (forced, see [`Session::click`])
    pub fn click(&self, selector: &str) -> Result<&Self> {
        self.session.click(selector)?;
        Ok(self)
    }

    /// Clear a field and type text into it
    pub fn type_text(&self, selector: &str, text: &str) -> Result<&Self> {
        self.session.type_text(selector, text)?;
        Ok(self)
    }

    /// Select a dropdown option by visible text
    pub fn select_option(&self, selector: &str, option_text: &str) -> Result<&Self> {
        self.session.select_option(selector, option_text)?;
        Ok(self)
    }

    /// Assert an element is visible
    pub fn assert_visible(&self, selector: &str) -> Result<&Self> {
        self.session.assert_visible(selector)?;
        Ok(self)
    }

    /// Assert an element's text contains a substring
    pub fn element_should_contain(&self, selector: &str, text: &str) -> Result<&Self> {
        self.session.assert_text_contains(selector, text)?;
        Ok(self)
    }

    /// Assert an element carries a CSS class
    pub fn should_have_class(&self, selector: &str, class: &str) -> Result<&Self> {
        self.session.assert_has_class(selector, class)?;
        Ok(self)
    }

    /// Assert the current URL contains a substring
    pub fn url_should_contain(&self, fragment: &str) -> Result<&Self> {
        self.session.assert_url_contains(fragment)?;
        Ok(self)
    }

    /// Assert the page title contains a substring
    pub fn title_should_contain(&self, fragment: &str) -> Result<&Self> {
        self.session.assert_title_contains(fragment)?;
        Ok(self)
    }

    /// Get the page title
    pub fn title(&self) -> Result<String> {
        self.session.title()
    }

    /// Get the current URL
    pub fn url(&self) -> String {
        self.session.current_url()
    }

    /// Take a screenshot
    pub fn take_screenshot(&self, name: &str) -> Result<PathBuf> {
        self.session.screenshot(name)
    }

    /// Wait for the document to finish loading
    pub fn wait_for_page_load(&self) -> Result<&Self> {
        self.session.wait_for_page_load()?;
        Ok(self)
    }
}
