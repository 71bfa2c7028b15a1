//! End-to-end flow over the site's state, without a browser
//!
//! Wires a `Location` to plain signals the way `Location::install` does,
//! then walks the landing -> menu -> products scenario.

use leptos::prelude::*;

use crate::catalog::{filter_products, CategoryFilter, PRODUCTS};
use crate::navigation::MenuState;
use crate::router::{path_from_fragment, Location, Route};

struct Visitor {
    location: Location,
    set_path: WriteSignal<String>,
    set_visits: WriteSignal<u32>,
    menu: MenuState,
}

impl Visitor {
    fn arrive(hash: &str) -> Self {
        let (path, set_path) = signal(path_from_fragment(hash));
        let (visits, set_visits) = signal(0u32);
        Self {
            location: Location::new(path, visits),
            set_path,
            set_visits,
            menu: MenuState::default(),
        }
    }

    /// What a `hashchange` does, followed by the navbar's reaction
    fn follow(&mut self, href: &str) {
        self.set_path.set(path_from_fragment(href));
        self.set_visits.update(|v| *v += 1);
        self.menu.navigated();
    }
}

#[test]
fn given_root_with_open_menu_when_navigating_to_products_then_menu_closed_and_full_grid() {
    // Given
    let mut visitor = Visitor::arrive("#/");
    assert_eq!(visitor.location.route(), Ok(Route::Home));
    visitor.menu.toggle();
    assert!(visitor.menu.is_open());

    // When
    visitor.follow(Route::Products.href());

    // Then
    assert!(!visitor.menu.is_open());
    assert_eq!(visitor.location.route(), Ok(Route::Products));
    assert_eq!(visitor.location.visits.get_untracked(), 1);
    let grid = filter_products(&PRODUCTS, CategoryFilter::default());
    assert_eq!(grid.len(), 8);
}

#[test]
fn given_products_when_following_same_link_then_counts_as_navigation() {
    let mut visitor = Visitor::arrive("#/products");
    visitor.menu.toggle();

    visitor.follow("#/products");

    assert!(!visitor.menu.is_open());
    assert_eq!(visitor.location.route(), Ok(Route::Products));
}

#[test]
fn given_unknown_fragment_when_arriving_then_no_page_highlighted() {
    let visitor = Visitor::arrive("#/shop");

    assert!(visitor.location.route().is_err());
    assert!(Route::ALL.iter().all(|r| !visitor.location.is_at(*r)));
}
