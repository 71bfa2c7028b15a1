//! Site Configuration
//!
//! Brand copy, outbound URLs and timings, provided via Leptos Context API.
//! URLs can be overridden at build time through environment variables.

use std::time::Duration;

use leptos::prelude::*;

/// Mailing-list endpoint (Mailchimp "post-json" form action)
pub const DEFAULT_SUBSCRIBE_URL: &str = "https://gmail.us11.list-manage.com/subscribe/post-json?u=594012d500b9cc95b32d31fa3&id=75a2e58659&f_id=0004aee0f0";

/// Marketplace link behind "Shop"
pub const DEFAULT_SHOP_URL: &str = "https://etsy.com";

/// How long a success/error message stays up before the form goes idle
pub const RESET_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub brand_cn: &'static str,
    pub shop_url: &'static str,
    pub subscribe_url: &'static str,
    pub contact_email: &'static str,
    pub social_handle: &'static str,
    pub reset_delay: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "One Sip One Brush",
            brand_cn: "一墨一茗",
            shop_url: option_env!("SIPBRUSH_SHOP_URL").unwrap_or(DEFAULT_SHOP_URL),
            subscribe_url: option_env!("SIPBRUSH_SUBSCRIBE_URL").unwrap_or(DEFAULT_SUBSCRIBE_URL),
            contact_email: "sipbrush@gmail.com",
            social_handle: "@OneSipOneBrush",
            reset_delay: RESET_DELAY,
        }
    }
}

impl SiteConfig {
    /// Reset delay in the unit browser timers take
    pub fn reset_delay_ms(&self) -> u32 {
        u32::try_from(self.reset_delay.as_millis()).unwrap_or(u32::MAX)
    }
}

/// Make the config available to every component below the caller
pub fn provide_site_config(config: SiteConfig) {
    provide_context(config);
}

/// Get the site config from context
pub fn use_site_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reset_delay_is_five_seconds() {
        let config = SiteConfig::default();
        assert_eq!(config.reset_delay, Duration::from_secs(5));
        assert_eq!(config.reset_delay_ms(), 5000);
    }

    #[test]
    fn test_reset_delay_ms_saturates() {
        let config = SiteConfig {
            reset_delay: Duration::from_secs(u64::MAX),
            ..SiteConfig::default()
        };
        assert_eq!(config.reset_delay_ms(), u32::MAX);
    }

    #[test]
    fn test_default_subscribe_url_targets_list() {
        let config = SiteConfig::default();
        if option_env!("SIPBRUSH_SUBSCRIBE_URL").is_none() {
            assert!(config.subscribe_url.starts_with("https://"));
            assert!(config.subscribe_url.contains("id=75a2e58659"));
        }
    }
}
