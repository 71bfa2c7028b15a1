//! Newsletter Signup
//!
//! Form state machine and mailing-list transport, shared by every
//! signup widget on the site.

mod client;
mod form;
mod submission;

pub use client::*;
pub use form::*;
pub use submission::submit_signup;

/// Where a signup widget is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Compact form in the site footer
    Footer,
    /// Full-width call-to-action on the home page
    Banner,
}

impl Placement {
    pub fn name(self) -> &'static str {
        match self {
            Placement::Footer => "footer",
            Placement::Banner => "banner",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Placement::Footer => "Email address",
            Placement::Banner => "Your email address",
        }
    }
}
