//! ==============================================================================
//! markup.rs - header html rendering
//! ==============================================================================
//!
//! the header as a plain html string. the custom element assigns it to its
//! own inner html on construction; the site worker splices it into pages.
//!
//! ==============================================================================

use crate::{NavLink, LINK_CLASS, NAV_CLASS, NAV_LINKS, SITE_TITLE, STYLESHEET_HREF, TITLE_CLASS};

/// inline rule for the banner container
pub const BANNER_STYLE: &str = "header {
  background-color: #333;
  color: white;
  padding: 1rem;
  text-align: center;
  width: 100%;
}";

/// full header fragment: stylesheet link, banner style, then the banner itself
pub fn render_header() -> String {
    let mut html = String::with_capacity(768);

    html.push_str(&format!(r#"<link rel="stylesheet" href="{}">"#, STYLESHEET_HREF));
    html.push('\n');
    html.push_str("<style>\n");
    html.push_str(BANNER_STYLE);
    html.push_str("\n</style>\n");

    html.push_str("<header>\n");
    html.push_str(&format!(r#"  <h1 class="{}">{}</h1>"#, TITLE_CLASS, SITE_TITLE));
    html.push('\n');
    html.push_str(&render_nav(&NAV_LINKS));
    html.push_str("</header>\n");

    html
}

/// `<nav>` block with one anchor per link
pub fn render_nav(links: &[NavLink]) -> String {
    let mut html = format!("  <nav class=\"{}\">\n", NAV_CLASS);
    for link in links {
        html.push_str(&format!(
            "    <a href=\"{}\" class=\"{}\">{}</a>\n",
            link.target, LINK_CLASS, link.label
        ));
    }
    html.push_str("  </nav>\n");
    html
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// (href, text) of every anchor, in document order
    fn anchors(html: &str) -> Vec<(String, String)> {
        html.split("<a href=\"")
            .skip(1)
            .map(|rest| {
                let (href, rest) = rest.split_once('"').unwrap();
                let text_start = rest.find('>').unwrap() + 1;
                let text_end = rest.find("</a>").unwrap();
                (href.to_string(), rest[text_start..text_end].to_string())
            })
            .collect()
    }

    #[test]
    fn test_single_heading_with_site_title() {
        let html = render_header();
        assert_eq!(html.matches("<h1").count(), 1);
        assert!(html.contains(&format!(">{}</h1>", SITE_TITLE)));
    }

    #[test]
    fn test_nav_has_four_links_in_order() {
        let html = render_header();
        let nav_start = html.find("<nav").unwrap();
        let nav_end = html.find("</nav>").unwrap();

        assert_eq!(
            anchors(&html[nav_start..nav_end]),
            vec![
                ("/".to_string(), "Home".to_string()),
                ("/wellpath".to_string(), "Wellpath".to_string()),
                ("/about".to_string(), "About".to_string()),
                ("/contact".to_string(), "Contact".to_string()),
            ]
        );
        // nothing outside the nav is a link
        assert_eq!(anchors(&html).len(), 4);
    }

    #[test]
    fn test_links_share_color_class() {
        let html = render_nav(&NAV_LINKS);
        assert_eq!(html.matches(&format!("class=\"{}\"", LINK_CLASS)).count(), 4);
    }

    #[test]
    fn test_stylesheet_comes_first() {
        let html = render_header();
        assert!(html.starts_with(r#"<link rel="stylesheet" href="/static/styles.css">"#));
    }

    #[test]
    fn test_banner_style_precedes_banner() {
        let html = render_header();
        let style = html.find("<style>").unwrap();
        let header = html.find("<header>").unwrap();
        assert!(style < header);
        assert!(html.contains("background-color: #333;"));
        assert!(html.contains("text-align: center;"));
        assert!(html.contains("width: 100%;"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let first = render_header();
        let second = render_header();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_nav_empty() {
        let html = render_nav(&[]);
        assert_eq!(html, format!("  <nav class=\"{}\">\n  </nav>\n", NAV_CLASS));
    }
}
