use crate::error::{Result, SuiteError};
use indexmap::IndexMap;
use serde::Serialize;

/// Map of logical field names to CSS locators
///
/// Each page object owns one, built once at construction and never mutated.
/// Uses IndexMap so iteration follows declaration order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectorMap {
    map: IndexMap<&'static str, &'static str>,
}

impl SelectorMap {
    /// Build a map from (field, locator) pairs
    ///
    /// Fails fast on an empty field name, an empty locator, or a duplicate
    /// field. A bad entry is an authoring defect in the page object, so it
    /// surfaces at construction, before any browser command runs.
    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Result<Self> {
        let mut map = IndexMap::with_capacity(pairs.len());
        for &(field, locator) in pairs {
            if field.trim().is_empty() {
                return Err(SuiteError::InvalidSelector {
                    field: field.to_string(),
                    reason: "field name is empty".to_string(),
                });
            }
            if locator.trim().is_empty() {
                return Err(SuiteError::InvalidSelector {
                    field: field.to_string(),
                    reason: "locator is empty".to_string(),
                });
            }
            if map.insert(field, locator).is_some() {
                return Err(SuiteError::InvalidSelector {
                    field: field.to_string(),
                    reason: "field declared twice".to_string(),
                });
            }
        }
        Ok(Self { map })
    }

    /// Locator for a field
    pub fn get(&self, field: &str) -> Result<&'static str> {
        self.map.get(field).copied().ok_or_else(|| SuiteError::MissingSelector(field.to_string()))
    }

    /// Check if a field is declared
    pub fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over (field, locator) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.map.iter().map(|(field, locator)| (*field, *locator))
    }

    /// Export to JSON for debugging
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let map = SelectorMap::from_pairs(&[
            ("loginname", "#loginFrm_loginname"),
            ("password", "#loginFrm_password"),
        ])
        .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("loginname").unwrap(), "#loginFrm_loginname");
        assert!(map.contains("password"));
    }

    #[test]
    fn test_missing_field_is_loud() {
        let map = SelectorMap::from_pairs(&[("email", "#email")]).unwrap();

        let err = map.get("zipcode").unwrap_err();
        assert!(matches!(err, SuiteError::MissingSelector(field) if field == "zipcode"));
    }

    #[test]
    fn test_empty_locator_rejected() {
        let result = SelectorMap::from_pairs(&[("email", "")]);
        assert!(matches!(result, Err(SuiteError::InvalidSelector { .. })));
    }

    #[test]
    fn test_empty_field_rejected() {
        let result = SelectorMap::from_pairs(&[("", "#email")]);
        assert!(matches!(result, Err(SuiteError::InvalidSelector { .. })));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = SelectorMap::from_pairs(&[("email", "#a"), ("email", "#b")]);
        assert!(matches!(result, Err(SuiteError::InvalidSelector { .. })));
    }

    #[test]
    fn test_iteration_order_is_declaration_order() {
        let map = SelectorMap::from_pairs(&[("c", "#c"), ("a", "#a"), ("b", "#b")]).unwrap();

        let fields: Vec<_> = map.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_to_json() {
        let map = SelectorMap::from_pairs(&[("submit", "button[title='Login']")]).unwrap();

        let json = map.to_json().unwrap();
        assert!(json.contains("submit"));
        assert!(json.contains("button[title='Login']"));
    }
}
