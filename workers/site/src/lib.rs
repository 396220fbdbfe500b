//! ==============================================================================
//! lib.rs - wellsite helper site worker
//! ==============================================================================
//!
//! purpose:
//!     serves the pages the header navigation points at. every page starts
//!     with the header markup included server-side, so the banner shows up
//!     before any script runs.
//!
//! relationships:
//!     - uses: shared (header markup, nav links, stylesheet path)
//!     - deployed to: cloudflare workers edge network
//!
//! api:
//!     GET / | /wellpath | /about | /contact
//!         response: html page with the header included
//!
//!     GET /static/styles.css
//!         response: site stylesheet
//!
//!     GET /api/nav
//!         response: [{"label": "Home", "target": "/"}, ...]
//!
//!     POST /api/las
//!         headers: X-File-Name: <name>.las (optional, extension checked)
//!         body: las 2.0 text
//!         response: parsed sections and rows as json, or 422
//!
//!     POST /api/survey
//!         body: survey listing (header row, one station per line)
//!         response: {"headers": [...], "stations": [[...], ...]}, or 422
//!
//! ==============================================================================

use serde::Serialize;
use shared::{
    check_las_extension, nav_link_for, parse_las, parse_survey, render_header, NavLink,
    NAV_LINKS, SITE_TITLE, STYLESHEET_HREF,
};
use worker::*;

const STYLESHEET: &str = include_str!("../static/styles.css");

// ==============================================================================
// pages
// ==============================================================================

/// page body for each nav target
const PAGE_BODIES: [(&str, &str); 4] = [
    (
        "/",
        "<h2>Welcome</h2>\n<p>Tools for reading and checking wellsite log data.</p>",
    ),
    (
        "/wellpath",
        "<h2>Wellpath</h2>\n<p>POST a LAS 2.0 well log to <code>/api/las</code> or a survey listing \
         to <code>/api/survey</code> to get its sections back as JSON.</p>",
    ),
    (
        "/about",
        "<h2>About</h2>\n<p>Wellsite helper collects small utilities for wellsite geologists.</p>",
    ),
    (
        "/contact",
        "<h2>Contact</h2>\n<p>Questions and bug reports are welcome through the project tracker.</p>",
    ),
];

fn page_body(target: &str) -> &'static str {
    PAGE_BODIES
        .iter()
        .find(|(path, _)| *path == target)
        .map(|(_, body)| *body)
        .unwrap_or("")
}

/// full html document for one nav entry
fn render_page(link: &NavLink) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{label} | {title}</title>\n\
         </head>\n\
         <body>\n\
         {header}\
         <main>\n{body}\n</main>\n\
         </body>\n\
         </html>\n",
        label = link.label,
        title = SITE_TITLE,
        header = render_header(),
        body = page_body(link.target),
    )
}

// ==============================================================================
// worker entry point
// ==============================================================================

#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    console_log!("{:?} {}", req.method(), req.path());

    // one route per header link
    let router = NAV_LINKS
        .iter()
        .fold(Router::new(), |router, link| router.get(link.target, handle_page));

    router
        .get(STYLESHEET_HREF, handle_stylesheet)
        .get("/api/nav", handle_nav)
        .post_async("/api/las", handle_las)
        .post_async("/api/survey", handle_survey)
        // health check
        .get("/health", |_, _| Response::ok("ok"))
        .run(req, env)
        .await
}

// ==============================================================================
// request handlers
// ==============================================================================

fn handle_page(req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    match nav_link_for(&req.path()) {
        Some(link) => Response::from_html(render_page(link)),
        None => Response::error("page not found", 404),
    }
}

fn handle_stylesheet(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    let mut headers = Headers::new();
    headers.set("Content-Type", "text/css; charset=utf-8")?;
    headers.set("Cache-Control", "public, max-age=3600")?;

    Ok(Response::ok(STYLESHEET)?.with_headers(headers))
}

fn handle_nav(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    json_response(&NAV_LINKS)
}

/// parse an uploaded las file
async fn handle_las(mut req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    if let Some(name) = req.headers().get("X-File-Name")? {
        if let Err(err) = check_las_extension(&name) {
            return Response::error(err.to_string(), 400);
        }
    }

    let body = match req.text().await {
        Ok(b) => b,
        Err(_) => return Response::error("invalid request body", 400),
    };

    match parse_las(&body) {
        Ok(data) => json_response(&data),
        Err(err) => Response::error(err.to_string(), 422),
    }
}

/// parse an uploaded survey listing
async fn handle_survey(mut req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    let body = match req.text().await {
        Ok(b) => b,
        Err(_) => return Response::error("invalid request body", 400),
    };

    match parse_survey(&body) {
        Ok(data) => json_response(&data),
        Err(err) => Response::error(err.to_string(), 422),
    }
}

// ==============================================================================
// helpers
// ==============================================================================

fn json_response<T: Serialize>(value: &T) -> Result<Response> {
    let json = serde_json::to_string(value).map_err(|e| Error::RustError(e.to_string()))?;

    let mut headers = Headers::new();
    headers.set("Content-Type", "application/json")?;
    headers.set("Access-Control-Allow-Origin", "*")?;

    Ok(Response::ok(json)?.with_headers(headers))
}

// ==============================================================================
// tests
// ==============================================================================
