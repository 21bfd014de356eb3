//! Site shell state and navigation model.

/// A link in the header or footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    /// Header navigation, desktop and mobile.
    pub const PRIMARY: &'static [NavLink] = &[
        NavLink {
            label: "Home",
            path: "/",
        },
        NavLink {
            label: "About",
            path: "/about",
        },
        NavLink {
            label: "FAQ",
            path: "/faq",
        },
    ];

    /// Footer links. The contact link is built from the site config.
    pub const FOOTER: &'static [NavLink] = &[
        NavLink {
            label: "About",
            path: "/about",
        },
        NavLink {
            label: "FAQ",
            path: "/faq",
        },
    ];
}

/// State owned by one shell instance: whether the mobile menu is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellState {
    menu_open: bool,
}

impl ShellState {
    pub const fn new() -> Self {
        Self { menu_open: false }
    }

    pub const fn is_menu_open(self) -> bool {
        self.menu_open
    }

    /// The hamburger button.
    #[must_use]
    pub const fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
        }
    }

    /// Any link activation. Always leaves the menu closed.
    #[must_use]
    pub const fn navigate(self) -> Self {
        Self { menu_open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!ShellState::new().is_menu_open());
    }

    #[test]
    fn test_navigation_closes_open_menu() {
        let state = ShellState::new().toggle_menu();
        assert!(state.is_menu_open());
        assert!(!state.navigate().is_menu_open());
    }

    #[test]
    fn test_navigation_with_closed_menu_is_noop() {
        let state = ShellState::new();
        assert_eq!(state.navigate(), state);
    }

    #[test]
    fn test_toggle_twice() {
        let state = ShellState::new().toggle_menu().toggle_menu();
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_primary_links() {
        let paths: Vec<_> = NavLink::PRIMARY.iter().map(|l| l.path).collect();
        assert_eq!(paths, ["/", "/about", "/faq"]);
    }
}
