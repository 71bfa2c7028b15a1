//! UI Components
//!
//! Reusable Leptos components.

pub mod icons;
mod navbar;
mod footer;
mod newsletter_signup;
mod product_card;
mod workshop_card;
mod category_tabs;

pub use navbar::Navbar;
pub use footer::Footer;
pub use newsletter_signup::NewsletterSignup;
pub use product_card::ProductCard;
pub use workshop_card::WorkshopCard;
pub use category_tabs::CategoryTabs;
