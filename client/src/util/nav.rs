//! Site navigation table and active-link rule.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { name: "Home", path: "/" },
    NavItem { name: "Technology", path: "/technology" },
    NavItem { name: "Gemma AI", path: "/gemma" },
    NavItem { name: "Product", path: "/product" },
    NavItem { name: "About", path: "/about" },
    NavItem { name: "Contact", path: "/contact" },
];

pub const DEMO_ITEM: NavItem = NavItem { name: "Request Demo", path: "/demo" };

/// Footer link columns: heading and links.
pub const FOOTER_GROUPS: [(&str, &[NavItem]); 2] = [
    (
        "Product",
        &[
            NavItem { name: "Technology", path: "/technology" },
            NavItem { name: "Features", path: "/product" },
            NavItem { name: "Try the Analyzer", path: "/analyze" },
            NavItem { name: "Request Demo", path: "/demo" },
        ],
    ),
    (
        "Company",
        &[NavItem { name: "About Us", path: "/about" }, NavItem { name: "Contact", path: "/contact" }],
    ),
];

/// Exact path equality; `/technology/x` does not activate `/technology`.
#[must_use]
pub fn is_active(current: &str, path: &str) -> bool {
    current == path
}

#[must_use]
pub fn link_class(current: &str, path: &str) -> &'static str {
    if is_active(current, path) { "nav-link nav-link--active" } else { "nav-link" }
}
