//! Page header component

use leptos::prelude::*;
use shared::{nav_links, BANNER_STYLE, SITE_TITLE, STYLESHEET_HREF, TITLE_CLASS};

use super::NavBar;

#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <link rel="stylesheet" href=STYLESHEET_HREF />
        <style>{BANNER_STYLE}</style>
        <header>
            <h1 class=TITLE_CLASS>{SITE_TITLE}</h1>
            <NavBar links=nav_links() />
        </header>
    }
}
