//! Behavioral tests for routing and the mobile menu

use crate::navigation::{MenuState, NAV_LINKS};
use crate::router::{routes, Route};

#[test]
fn given_open_menu_when_navigating_anywhere_then_menu_closes() {
    for from in Route::ALL {
        for to in Route::ALL {
            // Given
            let mut menu = MenuState::default();
            let mut current = from;
            menu.toggle();
            assert!(menu.is_open());

            // When
            current = Route::from_fragment(to.href()).unwrap_or(current);
            menu.navigated();

            // Then
            assert_eq!(current, to);
            assert!(!menu.is_open(), "menu should close navigating {:?} -> {:?}", from, to);
        }
    }
}

#[test]
fn given_closed_menu_when_navigating_then_stays_closed() {
    let mut menu = MenuState::default();
    menu.navigated();
    assert!(!menu.is_open());
}

#[test]
fn given_nav_links_when_checked_then_five_unique_paths() {
    let unique: std::collections::HashSet<_> = NAV_LINKS.iter().map(|l| l.route.path()).collect();
    assert_eq!(NAV_LINKS.len(), 5);
    assert_eq!(unique.len(), 5, "nav paths should be unique");
}

#[test]
fn given_nav_links_when_checked_then_every_link_has_chinese_label() {
    for link in NAV_LINKS {
        assert!(!link.label.is_empty());
        assert!(!link.label_cn.is_empty(), "{} has no Chinese label", link.label);
    }
}

#[test]
fn given_route_constants_except_home_when_checked_then_no_trailing_slash() {
    for route in Route::ALL {
        assert!(route.path().starts_with('/'));
        if route.path() != routes::HOME {
            assert!(!route.path().ends_with('/'));
        }
    }
}

#[test]
fn given_unknown_fragment_when_resolving_then_not_found() {
    assert!(Route::from_fragment("#/checkout").is_err());
    assert!(Route::from_fragment("#/products/42").is_err());
}
