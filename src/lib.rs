//! One Sip One Brush Frontend
//!
//! Client-side rendered Leptos site for a small tea-and-ink crafts studio:
//! landing page, product grid, workshops, about and contact, routed on the
//! URL fragment, with a newsletter signup in the footer and on the home page.
//!
//! ## Module Structure
//! - `app`: root component
//! - `router`: routes, fragment parsing, location context
//! - `navigation`: nav links and mobile menu state
//! - `newsletter`: signup form state and mailing-list client
//! - `catalog`: products, workshops, category filter
//! - `components` / `pages`: views
//! - `config`, `error`: site configuration and error types

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod navigation;
pub mod newsletter;
pub mod pages;
pub mod router;

#[cfg(test)]
mod tests;

pub use app::App;
