use std::time::Duration;
use thiserror::Error;

/// Errors produced by the suite's session and page layers
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Browser failed to launch
    #[error("failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Navigation request was rejected or the target could not be reached
    #[error("navigation failed: {0}")]
    NavigationFailed(String),

    /// Page did not reach a loaded state within the page-load timeout
    #[error("page did not finish loading within {0:?}")]
    NavigationTimeout(Duration),

    /// Selector matched no element within the locate timeout
    #[error("element '{selector}' not found within {timeout:?}")]
    ElementNotFound { selector: String, timeout: Duration },

    /// An expected condition was not met within the command timeout
    #[error("assertion failed: {0}")]
    AssertionFailed(String),

    /// A selector map was constructed with an empty field name or locator
    #[error("invalid selector map entry for '{field}': {reason}")]
    InvalidSelector { field: String, reason: String },

    /// A workflow referenced a field its selector map does not declare.
    /// This is an authoring defect in the page object, not a runtime condition.
    #[error("selector map has no entry for field '{0}'")]
    MissingSelector(String),

    /// Any other failure surfaced by the underlying CDP runtime
    #[error("browser runtime error: {0}")]
    Runtime(String),
}

/// Result type alias using SuiteError
pub type Result<T> = std::result::Result<T, SuiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_display() {
        let err = SuiteError::ElementNotFound {
            selector: "#loginFrm_loginname".to_string(),
            timeout: Duration::from_secs(10),
        };
        let message = err.to_string();
        assert!(message.contains("#loginFrm_loginname"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_assertion_failed_display() {
        let err = SuiteError::AssertionFailed("url does not contain 'account/account'".to_string());
        assert!(err.to_string().starts_with("assertion failed"));
    }

    #[test]
    fn test_missing_selector_display() {
        let err = SuiteError::MissingSelector("zipcode".to_string());
        assert!(err.to_string().contains("zipcode"));
    }
}
