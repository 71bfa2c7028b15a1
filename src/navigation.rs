//! Navigation State
//!
//! Nav link table and the mobile menu overlay state.

use crate::router::Route;

/// A top-level nav entry with its Chinese label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub label_cn: &'static str,
    pub route: Route,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", label_cn: "首页", route: Route::Home },
    NavLink { label: "Products", label_cn: "产品", route: Route::Products },
    NavLink { label: "Workshops", label_cn: "工坊", route: Route::Workshops },
    NavLink { label: "About", label_cn: "关于我们", route: Route::About },
    NavLink { label: "Contact", label_cn: "联系", route: Route::Contact },
];

/// Mobile menu overlay state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any navigation closes the overlay
    pub fn navigated(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigated_closes_and_stays_closed() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.navigated();
        assert!(!menu.is_open());
        menu.navigated();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_nav_links_cover_every_route_once() {
        let routes: Vec<Route> = NAV_LINKS.iter().map(|link| link.route).collect();
        assert_eq!(routes, Route::ALL.to_vec());
    }
}
