//! Subscription filter and list path construction

use crate::config::api;
use crate::error::{PlatformError, Result};

/// Which solutions to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscriptionFilter {
    /// Every solution in the tenant
    #[default]
    All,
    /// Only subscribed solutions
    Subscribed,
    /// Only solutions the tenant is not subscribed to
    Unsubscribed,
}

impl SubscriptionFilter {
    /// Build a filter from the `--subscribed` / `--unsubscribed` flags.
    /// Setting both is a usage error.
    pub fn from_flags(subscribed: bool, unsubscribed: bool) -> Result<Self> {
        match (subscribed, unsubscribed) {
            (true, true) => Err(PlatformError::Usage(
                "You cannot use both the subscribed flag and the unsubscribed flag".to_string(),
            )),
            (true, false) => Ok(Self::Subscribed),
            (false, true) => Ok(Self::Unsubscribed),
            (false, false) => Ok(Self::All),
        }
    }

    /// Server-side filter expression, if any
    pub fn expression(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Subscribed => Some(api::FILTER_SUBSCRIBED),
            Self::Unsubscribed => Some(api::FILTER_UNSUBSCRIBED),
        }
    }
}

/// Path of the solution collection
pub fn solution_list_path() -> &'static str {
    api::SOLUTIONS
}

/// Collection path with the URL-encoded filter clause attached
pub fn build_list_path(filter: SubscriptionFilter) -> String {
    match filter.expression() {
        Some(expr) => format!(
            "{}?filter={}",
            solution_list_path(),
            urlencoding::encode(expr)
        ),
        None => solution_list_path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded_filter(path: &str) -> Option<String> {
        let (_, query) = path.split_once('?')?;
        let value = query.strip_prefix("filter=")?;
        Some(urlencoding::decode(value).unwrap().into_owned())
    }

    #[test]
    fn test_list_path() {
        assert_eq!(
            solution_list_path(),
            "objstore/v1beta/objects/extensibility:solution"
        );
    }

    #[test]
    fn test_both_flags_is_usage_error() {
        let err = SubscriptionFilter::from_flags(true, true).unwrap_err();
        assert!(matches!(err, PlatformError::Usage(_)));
        assert!(err.to_string().contains("cannot use both"));
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(
            SubscriptionFilter::from_flags(false, false).unwrap(),
            SubscriptionFilter::All
        );
        assert_eq!(
            SubscriptionFilter::from_flags(true, false).unwrap(),
            SubscriptionFilter::Subscribed
        );
        assert_eq!(
            SubscriptionFilter::from_flags(false, true).unwrap(),
            SubscriptionFilter::Unsubscribed
        );
    }

    #[test]
    fn test_no_filter_has_no_query() {
        let path = build_list_path(SubscriptionFilter::All);
        assert_eq!(path, solution_list_path());
        assert!(!path.contains('?'));
    }

    #[test]
    fn test_subscribed_filter_encoded() {
        let path = build_list_path(SubscriptionFilter::Subscribed);
        assert!(!path.contains(' '));
        assert_eq!(
            decoded_filter(&path).as_deref(),
            Some("data.isSubscribed eq true")
        );
    }

    #[test]
    fn test_unsubscribed_filter_encoded() {
        let path = build_list_path(SubscriptionFilter::Unsubscribed);
        assert!(!path.contains(' '));
        assert_eq!(
            decoded_filter(&path).as_deref(),
            Some("data.isSubscribed ne true")
        );
    }
}
