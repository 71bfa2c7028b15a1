//! Page components, one per route.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod products;
pub mod workshops;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use products::Products;
pub use workshops::Workshops;
