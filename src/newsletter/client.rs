//! Mailing-List Client
//!
//! Sends signups to the mailing-list provider. The request goes out in
//! `no-cors` mode, so the response is opaque: neither status nor body can be
//! read, and "returned at all" is the only success signal available.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use web_sys::RequestMode;

use crate::error::{Result, SiteError};

/// Characters `encodeURIComponent` leaves untouched
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Transport seam for newsletter signups
#[allow(async_fn_in_trait)]
pub trait Subscriber {
    async fn subscribe(&self, email: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailingList {
    endpoint: &'static str,
}

impl MailingList {
    pub fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }

    /// Endpoint with `EMAIL=<encoded>` appended
    pub fn request_url(&self, email: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}EMAIL={}",
            self.endpoint,
            separator,
            utf8_percent_encode(email, URI_COMPONENT)
        )
    }
}

impl Subscriber for MailingList {
    async fn subscribe(&self, email: &str) -> Result<()> {
        let url = self.request_url(email);
        Request::get(&url)
            .mode(RequestMode::NoCors)
            .send()
            .await
            .map(|_opaque| ())
            .map_err(|e| SiteError::Transport(e.to_string()))
    }
}
