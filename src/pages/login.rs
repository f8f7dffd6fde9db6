use crate::browser::Session;
use crate::error::Result;
use crate::pages::{BasePage, SelectorMap};

/// Entry point for the account login form
const LOGIN_PATH: &str = "index.php?rt=account/login";

/// Fields the login workflows reference
const SELECTORS: &[(&str, &str)] = &[
    ("loginname", "#loginFrm_loginname"),
    ("password", "#loginFrm_password"),
    ("submit", "button[title='Login']"),
    ("error_banner", ".alert-error"),
];

/// Page object for the account login page
pub struct LoginPage<'s> {
    base: BasePage<'s>,
    selectors: SelectorMap,
}

impl<'s> LoginPage<'s> {
    pub fn new(session: &'s Session) -> Result<Self> {
        Ok(Self { base: BasePage::new(session), selectors: SelectorMap::from_pairs(SELECTORS)? })
    }

    /// Open the login page
    pub fn visit(&self) -> Result<&Self> {
        self.base.visit(LOGIN_PATH)?;
        Ok(self)
    }

    pub fn enter_loginname(&self, loginname: &str) -> Result<&Self> {
        self.base.type_text(self.selectors.get("loginname")?, loginname)?;
        Ok(self)
    }

    pub fn enter_password(&self, password: &str) -> Result<&Self> {
        self.base.type_text(self.selectors.get("password")?, password)?;
        Ok(self)
    }

    pub fn submit(&self) -> Result<&Self> {
        self.base.click(self.selectors.get("submit")?)?;
        Ok(self)
    }

    /// Enter credentials and submit
    ///
    /// Asserts nothing about the outcome; the caller owns the post-condition
    /// (URL change on success, error banner on failure).
    pub fn login(&self, loginname: &str, password: &str) -> Result<&Self> {
        self.enter_loginname(loginname)?.enter_password(password)?.submit()
    }

    /// Assert the login error banner is shown with the given text
    pub fn error_message_should_contain(&self, text: &str) -> Result<&Self> {
        let banner = self.selectors.get("error_banner")?;
        self.base.assert_visible(banner)?.element_should_contain(banner, text)?;
        Ok(self)
    }

    /// Assert a form field is flagged with the validation error class
    pub fn field_should_be_flagged(&self, field: &str) -> Result<&Self> {
        self.base.should_have_class(self.selectors.get(field)?, "error")?;
        Ok(self)
    }

    pub fn url_should_contain(&self, fragment: &str) -> Result<&Self> {
        self.base.url_should_contain(fragment)?;
        Ok(self)
    }

    pub fn title_should_contain(&self, fragment: &str) -> Result<&Self> {
        self.base.title_should_contain(fragment)?;
        Ok(self)
    }
}
