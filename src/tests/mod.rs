//! Behavioral tests
//!
//! Given-when-then tests that drive the site's state the way the views do,
//! without a DOM.

mod navigation_behaviors;
mod site_flow_behaviors;
