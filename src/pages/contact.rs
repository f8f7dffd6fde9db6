use crate::browser::Session;
use crate::error::Result;
use crate::pages::{BasePage, SelectorMap};
use serde::{Deserialize, Serialize};

/// Entry point for the contact form
const CONTACT_PATH: &str = "index.php?rt=content/contact";

/// Fields the contact workflows reference
const SELECTORS: &[(&str, &str)] = &[
    ("name", "#ContactUsFrm_first_name"),
    ("email", "#ContactUsFrm_email"),
    ("enquiry", "#ContactUsFrm_enquiry"),
    ("submit", "button[title='Submit']"),
    ("success_banner", "section.mb40"),
    ("alert", ".alert-success"),
];

/// Input for the contact form workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub enquiry: String,
}

/// Page object for the contact-us page
pub struct ContactUsPage<'s> {
    base: BasePage<'s>,
    selectors: SelectorMap,
}

impl<'s> ContactUsPage<'s> {
    pub fn new(session: &'s Session) -> Result<Self> {
        Ok(Self { base: BasePage::new(session), selectors: SelectorMap::from_pairs(SELECTORS)? })
    }

    /// Open the contact page
    pub fn visit(&self) -> Result<&Self> {
        self.base.visit(CONTACT_PATH)?;
        Ok(self)
    }

    pub fn fill_name(&self, name: &str) -> Result<&Self> {
        self.base.type_text(self.selectors.get("name")?, name)?;
        Ok(self)
    }

    pub fn fill_email(&self, email: &str) -> Result<&Self> {
        self.base.type_text(self.selectors.get("email")?, email)?;
        Ok(self)
    }

    pub fn fill_enquiry(&self, enquiry: &str) -> Result<&Self> {
        self.base.type_text(self.selectors.get("enquiry")?, enquiry)?;
        Ok(self)
    }

    pub fn submit(&self) -> Result<&Self> {
        self.base.click(self.selectors.get("submit")?)?;
        Ok(self)
    }

    /// Fill every contact field from a form record
    pub fn fill_contact_form(&self, form: &ContactForm) -> Result<&Self> {
        self.fill_name(&form.name)?.fill_email(&form.email)?.fill_enquiry(&form.enquiry)
    }

    /// Assert the post-submit confirmation is shown with the given text
    pub fn success_message_should_contain(&self, text: &str) -> Result<&Self> {
        let banner = self.selectors.get("success_banner")?;
        self.base.assert_visible(banner)?.element_should_contain(banner, text)?;
        Ok(self)
    }

    /// Assert the generic success alert is visible
    pub fn success_alert_should_be_visible(&self) -> Result<&Self> {
        self.base.assert_visible(self.selectors.get("alert")?)?;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_map_is_valid() {
        let selectors = SelectorMap::from_pairs(SELECTORS).unwrap();

        for field in ["name", "email", "enquiry", "submit", "success_banner", "alert"] {
            assert!(selectors.contains(field), "missing field {}", field);
        }
    }

    #[test]
    fn test_contact_path() {
        assert_eq!(CONTACT_PATH, "index.php?rt=content/contact");
    }

    #[test]
    fn test_contact_form_deserializes() {
        let json = serde_json::json!({
            "name": "Test User",
            "email": "test123@example.com",
            "enquiry": "This is a test enquiry message."
        });

        let form: ContactForm = serde_json::from_value(json).unwrap();
        assert_eq!(form.name, "Test User");
        assert_eq!(form.email, "test123@example.com");
    }
}
