//! Subscription Form State
//!
//! One newsletter signup attempt: `Idle -> Loading -> Success | Error`,
//! then back to `Idle` once the reset delay has elapsed.

use crate::error::{Result, SiteError};

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const SUCCESS_MESSAGE: &str = "Thanks for subscribing! Please check your email to confirm.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubscribeStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubscribeStatus {
    pub fn button_label(self) -> &'static str {
        match self {
            SubscribeStatus::Loading => "Subscribing...",
            SubscribeStatus::Success => "✓ Subscribed!",
            SubscribeStatus::Idle | SubscribeStatus::Error => "Subscribe",
        }
    }

    /// Success or error: a reset is pending
    pub fn is_settled(self) -> bool {
        matches!(self, SubscribeStatus::Success | SubscribeStatus::Error)
    }
}

/// A validated request waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub email: String,
    generation: u32,
}

/// Identifies which settled attempt a pending reset belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u32);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscribeForm {
    email: String,
    status: SubscribeStatus,
    message: String,
    generation: u32,
}

impl SubscribeForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> SubscribeStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_busy(&self) -> bool {
        self.status == SubscribeStatus::Loading
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Validate and move to `Loading`.
    ///
    /// A bad address settles the form as `Error` right away and leaves the
    /// input untouched. Submitting while a request is pending changes nothing.
    pub fn begin(&mut self) -> Result<Attempt> {
        if self.is_busy() {
            return Err(SiteError::SubscriptionInFlight);
        }
        self.generation = self.generation.wrapping_add(1);

        if self.email.is_empty() || !self.email.contains('@') {
            self.status = SubscribeStatus::Error;
            self.message = INVALID_EMAIL_MESSAGE.to_string();
            return Err(SiteError::InvalidEmail(self.email.clone()));
        }

        self.status = SubscribeStatus::Loading;
        Ok(Attempt {
            email: self.email.clone(),
            generation: self.generation,
        })
    }

    /// Record the transport outcome. Any `Ok` counts as subscribed: the
    /// request is opaque, so there is nothing more to inspect.
    pub fn finish(&mut self, attempt: &Attempt, outcome: Result<()>) -> Option<ResetTicket> {
        if self.status != SubscribeStatus::Loading || attempt.generation != self.generation {
            return None;
        }
        match outcome {
            Ok(()) => {
                self.status = SubscribeStatus::Success;
                self.message = SUCCESS_MESSAGE.to_string();
                self.email.clear();
            }
            Err(_) => {
                self.status = SubscribeStatus::Error;
                self.message = FAILURE_MESSAGE.to_string();
            }
        }
        self.reset_ticket()
    }

    /// Ticket for the current settled state, if any
    pub fn reset_ticket(&self) -> Option<ResetTicket> {
        self.status.is_settled().then_some(ResetTicket(self.generation))
    }

    /// Back to `Idle`, unless a newer attempt has started since `ticket`
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if ticket.0 != self.generation || !self.status.is_settled() {
            return false;
        }
        self.status = SubscribeStatus::Idle;
        self.message.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(email: &str) -> SubscribeForm {
        let mut form = SubscribeForm::default();
        form.set_email(email.to_string());
        form
    }

    #[test]
    fn test_starts_idle() {
        let form = SubscribeForm::default();
        assert_eq!(form.status(), SubscribeStatus::Idle);
        assert!(form.message().is_empty());
        assert!(form.reset_ticket().is_none());
    }

    #[test]
    fn test_rejects_address_without_at() {
        for input in ["", "tea", "ink.example.com", "   "] {
            let mut form = form_with(input);
            let result = form.begin();
            assert_eq!(result, Err(SiteError::InvalidEmail(input.to_string())));
            assert_eq!(form.status(), SubscribeStatus::Error);
            assert_eq!(form.message(), INVALID_EMAIL_MESSAGE);
            assert_eq!(form.email(), input);
            assert!(form.reset_ticket().is_some());
        }
    }

    #[test]
    fn test_valid_address_goes_loading() {
        let mut form = form_with("mei@example.com");
        let attempt = form.begin().expect("valid email");
        assert_eq!(attempt.email, "mei@example.com");
        assert_eq!(form.status(), SubscribeStatus::Loading);
        assert!(form.is_busy());
        assert!(form.reset_ticket().is_none());
    }

    #[test]
    fn test_success_clears_email() {
        let mut form = form_with("mei@example.com");
        let attempt = form.begin().expect("valid email");
        let ticket = form.finish(&attempt, Ok(()));
        assert!(ticket.is_some());
        assert_eq!(form.status(), SubscribeStatus::Success);
        assert_eq!(form.message(), SUCCESS_MESSAGE);
        assert_eq!(form.email(), "");
    }

    #[test]
    fn test_transport_failure_keeps_email() {
        let mut form = form_with("mei@example.com");
        let attempt = form.begin().expect("valid email");
        let ticket = form.finish(&attempt, Err(SiteError::Transport("offline".into())));
        assert!(ticket.is_some());
        assert_eq!(form.status(), SubscribeStatus::Error);
        assert_eq!(form.message(), FAILURE_MESSAGE);
        assert_eq!(form.email(), "mei@example.com");
    }

    #[test]
    fn test_expire_returns_to_idle() {
        let mut form = form_with("mei@example.com");
        let attempt = form.begin().expect("valid email");
        let ticket = form.finish(&attempt, Ok(())).expect("settled");
        assert!(form.expire(ticket));
        assert_eq!(form.status(), SubscribeStatus::Idle);
        assert!(form.message().is_empty());
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut form = form_with("mei@example.com");
        let attempt = form.begin().expect("valid email");
        let before = form.clone();
        assert_eq!(form.begin(), Err(SiteError::SubscriptionInFlight));
        assert_eq!(form, before);
        assert!(form.finish(&attempt, Ok(())).is_some());
    }

    #[test]
    fn test_stale_ticket_does_not_reset_newer_attempt() {
        let mut form = form_with("bad");
        let _ = form.begin();
        let stale = form.reset_ticket().expect("settled");

        form.set_email("mei@example.com".to_string());
        let attempt = form.begin().expect("valid email");
        let fresh = form.finish(&attempt, Ok(())).expect("settled");

        assert!(!form.expire(stale));
        assert_eq!(form.status(), SubscribeStatus::Success);
        assert!(form.expire(fresh));
    }

    #[test]
    fn test_expire_twice_is_noop() {
        let mut form = form_with("x");
        let _ = form.begin();
        let ticket = form.reset_ticket().expect("settled");
        assert!(form.expire(ticket));
        assert!(!form.expire(ticket));
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(SubscribeStatus::Idle.button_label(), "Subscribe");
        assert_eq!(SubscribeStatus::Loading.button_label(), "Subscribing...");
        assert_eq!(SubscribeStatus::Success.button_label(), "✓ Subscribed!");
        assert_eq!(SubscribeStatus::Error.button_label(), "Subscribe");
    }
}
