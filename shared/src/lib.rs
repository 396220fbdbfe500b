//! ==============================================================================
//! lib.rs - shared header definitions for wellsite helper
//! ==============================================================================
//!
//! purpose:
//!     defines the page header every wellsite helper page carries: the site
//!     title, the navigation links, the stylesheet reference and the custom
//!     element tag host pages use to place it.
//!
//! relationships:
//!     - used by: component (custom element + leptos view, compiled to wasm)
//!     - used by: workers/site (server-side include of the header markup,
//!       las and survey uploads from the wellpath page)
//!
//! design rationale:
//!     the header is a fixed fragment. keeping every literal here means the
//!     wasm element, the leptos view and the worker-rendered pages can never
//!     drift apart.
//!
//! ==============================================================================

use serde::Serialize;

pub mod las;
pub mod markup;
pub mod registry;
pub mod survey;

pub use las::{check_las_extension, parse_las, read_las_file, LasData, LasEntry, LasError};
pub use markup::{render_header, render_nav, BANNER_STYLE};
pub use registry::{
    define_once, is_valid_element_name, ElementRegistry, MemoryRegistry, Registration,
    RegistryError,
};
pub use survey::{parse_survey, SurveyData, SurveyError};

// ==============================================================================
// header constants
// ==============================================================================

/// tag name host pages use: `<header-component></header-component>`
pub const TAG_NAME: &str = "header-component";

/// text shown in the banner heading
pub const SITE_TITLE: &str = "Wellsite helper";

/// site-wide stylesheet, resolved against the site root
pub const STYLESHEET_HREF: &str = "/static/styles.css";

pub const TITLE_CLASS: &str = "text-4xl text-white uppercase font-semibold";
pub const NAV_CLASS: &str = "flex justify-center space-x-4";

/// shared link color for every nav entry
pub const LINK_CLASS: &str = "text-blue-500";

// ==============================================================================
// navigation
// ==============================================================================

/// one navigation entry: label shown to the user, site path it points at
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, target: &'static str) -> Self {
        Self { label, target }
    }
}

/// header navigation, in display order
pub static NAV_LINKS: [NavLink; 4] = [
    NavLink::new("Home", "/"),
    NavLink::new("Wellpath", "/wellpath"),
    NavLink::new("About", "/about"),
    NavLink::new("Contact", "/contact"),
];

pub fn nav_links() -> &'static [NavLink] {
    &NAV_LINKS
}

/// look up the nav entry for a request path, if the header links to it
pub fn nav_link_for(path: &str) -> Option<&'static NavLink> {
    NAV_LINKS.iter().find(|link| link.target == path)
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_order() {
        let pairs: Vec<(&str, &str)> = NAV_LINKS.iter().map(|l| (l.label, l.target)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Home", "/"),
                ("Wellpath", "/wellpath"),
                ("About", "/about"),
                ("Contact", "/contact"),
            ]
        );
    }

    #[test]
    fn test_nav_links_are_non_empty_root_paths() {
        for link in NAV_LINKS.iter() {
            assert!(!link.label.is_empty());
            assert!(link.target.starts_with('/'));
        }
    }

    #[test]
    fn test_nav_link_for() {
        assert_eq!(nav_link_for("/about").map(|l| l.label), Some("About"));
        assert_eq!(nav_link_for("/"), Some(&NAV_LINKS[0]));
        assert!(nav_link_for("/missing").is_none());
    }

    #[test]
    fn test_nav_link_serialization() {
        let json = serde_json::to_string(&NAV_LINKS[1]).unwrap();
        assert_eq!(json, r#"{"label":"Wellpath","target":"/wellpath"}"#);
    }

    #[test]
    fn test_tag_name_is_a_valid_element_name() {
        assert!(is_valid_element_name(TAG_NAME));
    }
}
