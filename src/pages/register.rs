use crate::browser::Session;
use crate::data::UserRecord;
use crate::error::Result;
use crate::pages::{BasePage, SelectorMap};

/// Entry point for the account creation form
const REGISTER_PATH: &str = "index.php?rt=account/create";

/// Fields the registration workflows reference
const SELECTORS: &[(&str, &str)] = &[
    ("firstname", "#AccountFrm_firstname"),
    ("lastname", "#AccountFrm_lastname"),
    ("email", "#AccountFrm_email"),
    ("phone", "#AccountFrm_telephone"),
    ("address", "#AccountFrm_address_1"),
    ("city", "#AccountFrm_city"),
    ("region", "#AccountFrm_zone_id"),
    ("zipcode", "#AccountFrm_postcode"),
    ("country", "#AccountFrm_country_id"),
    ("loginname", "#AccountFrm_loginname"),
    ("password", "#AccountFrm_password"),
    ("password_confirm", "#AccountFrm_confirm"),
    ("agree", "#AccountFrm_agree"),
    ("submit", "button[title='Continue']"),
];

/// Page object for the account creation page
pub struct RegisterPage<'s> {
    base: BasePage<'s>,
    selectors: SelectorMap,
}

impl<'s> RegisterPage<'s> {
    pub fn new(session: &'s Session) -> Result<Self> {
        Ok(Self { base: BasePage::new(session), selectors: SelectorMap::from_pairs(SELECTORS)? })
    }

    /// Open the registration page
    pub fn visit(&self) -> Result<&Self> {
        self.base.visit(REGISTER_PATH)?;
        Ok(self)
    }

    pub fn enter_first_name(&self, name: &str) -> Result<&Self> {
        self.base.type_text(self.selectors.get("firstname")?, name)?;
        Ok(self)
    }

    pub fn enter_last_name(&self, name: &str) -> Result<&Self> {
        self.base.type_text(self.selectors.get("lastname")?, name)?;
        Ok(self)
    }

    pub fn enter_email(&self, email: &str) -> Result<&Self> {
        self.base.type_text(self.selectors.get("email")?, email)?;
        Ok(self)
    }

    pub fn enter_phone(&self, phone: &str) -> Result<&Self> {
        self.base.type_text(self.selectors.get("phone")?, phone)?;
        Ok(self)
    }

    pub fn enter_address(&self, address: &str) -> Result<&Self> {
        self.base.type_text(self.selectors.get("address")?, address)?;
        Ok(self)
    }

    pub fn enter_city(&self, city: &str) -> Result<&Self> {
        self.base.type_text(self.selectors.get("city")?, city)?;
        Ok(self)
    }

    pub fn select_country(&self, country: &str) -> Result<&Self> {
        self.base.select_option(self.selectors.get("country")?, country)?;
        Ok(self)
    }

    pub fn select_region(&self, region: &str) -> Result<&Self> {
        self.base.select_option(self.selectors.get("region")?, region)?;
        Ok(self)
    }

    pub fn enter_zipcode(&self, zipcode: &str) -> Result<&Self> {
        self.base.type_text(self.selectors.get("zipcode")?, zipcode)?;
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

    pub fn enter_password_confirm(&self, password: &str) -> Result<&Self> {
        self.base.type_text(self.selectors.get("password_confirm")?, password)?;
        Ok(self)
    }

    pub fn agree_to_terms(&self) -> Result<&Self> {
        self.base.click(self.selectors.get("agree")?)?;
        Ok(self)
    }

    pub fn submit(&self) -> Result<&Self> {
        self.base.click(self.selectors.get("submit")?)?;
        Ok(self)
    }

    /// Fill the whole registration form from a user record
    ///
    /// Required fields (first name, last name, email) are always filled;
    /// optional fields only when the record carries them. The confirmation
    /// field always mirrors the primary password, so password-mismatch
    /// handling is not testable through this workflow. Terms are agreed to
    /// regardless of which optional fields were supplied.
    pub fn fill_registration_form(&self, user: &UserRecord) -> Result<&Self> {
        self.enter_first_name(&user.first_name)?;
        self.enter_last_name(&user.last_name)?;
        self.enter_email(&user.email)?;

        if let Some(phone) = &user.phone {
            self.enter_phone(phone)?;
        }
        if let Some(address) = &user.address {
            self.enter_address(address)?;
        }
        if let Some(city) = &user.city {
            self.enter_city(city)?;
        }
        // Country before region: picking a country repopulates the zone list.
        if let Some(country) = &user.country {
            self.select_country(country)?;
        }
        if let Some(region) = &user.region {
            self.select_region(region)?;
        }
        if let Some(zipcode) = &user.zipcode {
            self.enter_zipcode(zipcode)?;
        }
        if let Some(loginname) = &user.loginname {
            self.enter_loginname(loginname)?;
        }
        if let Some(password) = &user.password {
            self.enter_password(password)?;
            self.enter_password_confirm(password)?;
        }

        self.agree_to_terms()
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

        for field in [
            "firstname",
            "lastname",
            "email",
            "phone",
            "address",
            "city",
            "region",
            "zipcode",
            "country",
            "loginname",
            "password",
            "password_confirm",
            "agree",
            "submit",
        ] {
            assert!(selectors.contains(field), "missing field {}", field);
        }
    }

    #[test]
    fn test_register_path() {
        assert_eq!(REGISTER_PATH, "index.php?rt=account/create");
    }
}
