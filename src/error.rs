//! Site Errors
//!
//! Every recoverable failure in the site funnels into [`SiteError`].
//! None of them are fatal: the UI stays interactive after each one.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    /// Email failed the local check (empty or missing '@')
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
    /// A subscription request from this form is still pending
    #[error("a subscription request is already in flight")]
    SubscriptionInFlight,
    /// The mailing-list request threw before producing any response
    #[error("subscription request failed: {0}")]
    Transport(String),
    /// Path does not match any of the site's pages
    #[error("route not found: {0}")]
    RouteNotFound(String),
}

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = SiteError::RouteNotFound("/shop".to_string());
        assert_eq!(error.to_string(), "route not found: /shop");

        let error = SiteError::Transport("NetworkError".to_string());
        assert_eq!(error.to_string(), "subscription request failed: NetworkError");

        let error = SiteError::InvalidEmail("tea".to_string());
        assert_eq!(error.to_string(), "invalid email address: \"tea\"");
    }

    #[test]
    fn test_error_clone() {
        let error = SiteError::SubscriptionInFlight;
        assert_eq!(error.clone(), error);
    }
}
