//! Fragment Router
//!
//! Maps the URL fragment (`#/products`) to one of the site's pages.
//! The host only ever serves `index.html`; everything after `#` is ours.

use leptos::ev;
use leptos::prelude::*;

use crate::error::{Result, SiteError};
use crate::pages::{About, Contact, Home, NotFound, Products, Workshops};

/// Route paths as constants
pub mod routes {
    pub const HOME: &str = "/";
    pub const PRODUCTS: &str = "/products";
    pub const WORKSHOPS: &str = "/workshops";
    pub const ABOUT: &str = "/about";
    pub const CONTACT: &str = "/contact";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Products,
    Workshops,
    About,
    Contact,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Products,
        Route::Workshops,
        Route::About,
        Route::Contact,
    ];

    /// Parse a path such as `/products` (one trailing slash tolerated)
    pub fn from_path(path: &str) -> Result<Self> {
        let normalized = match path {
            "" | "/" => routes::HOME,
            other => other.strip_suffix('/').unwrap_or(other),
        };
        match normalized {
            routes::HOME => Ok(Route::Home),
            routes::PRODUCTS => Ok(Route::Products),
            routes::WORKSHOPS => Ok(Route::Workshops),
            routes::ABOUT => Ok(Route::About),
            routes::CONTACT => Ok(Route::Contact),
            _ => Err(SiteError::RouteNotFound(path.to_string())),
        }
    }

    /// Parse a `location.hash` value such as `#/products`
    pub fn from_fragment(hash: &str) -> Result<Self> {
        Self::from_path(&path_from_fragment(hash))
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => routes::HOME,
            Route::Products => routes::PRODUCTS,
            Route::Workshops => routes::WORKSHOPS,
            Route::About => routes::ABOUT,
            Route::Contact => routes::CONTACT,
        }
    }

    /// Anchor target for links
    pub fn href(self) -> &'static str {
        match self {
            Route::Home => "#/",
            Route::Products => "#/products",
            Route::Workshops => "#/workshops",
            Route::About => "#/about",
            Route::Contact => "#/contact",
        }
    }
}

/// Turn a fragment into a path: drops `#` and any query, defaults to `/`
pub fn path_from_fragment(hash: &str) -> String {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    let fragment = fragment.split('?').next().unwrap_or_default();
    if fragment.is_empty() {
        routes::HOME.to_string()
    } else if fragment.starts_with('/') {
        fragment.to_string()
    } else {
        format!("/{fragment}")
    }
}

// ========================
// Location Context
// ========================

/// Current location, read-only for every consumer.
///
/// `visits` increases on each navigation, including re-entering the
/// same path, so effects can react to "a navigation happened".
#[derive(Clone, Copy)]
pub struct Location {
    pub path: ReadSignal<String>,
    pub visits: ReadSignal<u32>,
}

impl Location {
    pub fn new(path: ReadSignal<String>, visits: ReadSignal<u32>) -> Self {
        Self { path, visits }
    }

    /// Start tracking `hashchange` and provide the location to children.
    /// Called once, by the root component.
    pub fn install() -> Self {
        let (path, set_path) = signal(current_path());
        let (visits, set_visits) = signal(0u32);

        let handle = window_event_listener(ev::hashchange, move |_| {
            let next = current_path();
            log::debug!("[Router] navigated to {}", next);
            set_path.set(next);
            set_visits.update(|v| *v = v.wrapping_add(1));
        });
        on_cleanup(move || handle.remove());

        let location = Self::new(path, visits);
        provide_context(location);
        location
    }

    pub fn route(&self) -> Result<Route> {
        self.path.with(|p| Route::from_path(p))
    }

    pub fn is_at(&self, route: Route) -> bool {
        self.route() == Ok(route)
    }
}

/// Get the location from context
pub fn use_location() -> Location {
    expect_context::<Location>()
}

fn current_path() -> String {
    window()
        .location()
        .hash()
        .map(|hash| path_from_fragment(&hash))
        .unwrap_or_else(|_| routes::HOME.to_string())
}

// ========================
// Components
// ========================

/// Renders exactly one page for the current location
#[component]
pub fn AppRouter() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| location.route());

    move || match route.get() {
        Ok(Route::Home) => view! { <Home /> }.into_any(),
        Ok(Route::Products) => view! { <Products /> }.into_any(),
        Ok(Route::Workshops) => view! { <Workshops /> }.into_any(),
        Ok(Route::About) => view! { <About /> }.into_any(),
        Ok(Route::Contact) => view! { <Contact /> }.into_any(),
        Err(err) => {
            log::warn!("[Router] {}", err);
            view! { <NotFound /> }.into_any()
        }
    }
}

/// Scrolls the window back to the top after every navigation
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        let _ = location.visits.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}
