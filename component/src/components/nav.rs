//! Navigation bar component

use leptos::prelude::*;
use shared::{NavLink, LINK_CLASS, NAV_CLASS};

/// one anchor per link, in slice order
#[component]
pub fn NavBar(links: &'static [NavLink]) -> impl IntoView {
    view! {
        <nav class=NAV_CLASS>
            {links
                .iter()
                .map(|link| view! { <a href=link.target class=LINK_CLASS>{link.label}</a> })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use shared::{nav_links, render_nav, NAV_LINKS};

    #[test]
    fn test_page_header_passes_full_nav() {
        let labels: Vec<&str> = nav_links().iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Home", "Wellpath", "About", "Contact"]);
        assert_eq!(nav_links(), &NAV_LINKS[..]);
    }

    #[test]
    fn test_string_rendition_of_same_links() {
        let html = render_nav(nav_links());
        let home = html.find("href=\"/\"").unwrap();
        let wellpath = html.find("href=\"/wellpath\"").unwrap();
        let about = html.find("href=\"/about\"").unwrap();
        let contact = html.find("href=\"/contact\"").unwrap();
        assert!(home < wellpath && wellpath < about && about < contact);
    }
}
