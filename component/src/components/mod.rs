//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod nav;

pub use header::PageHeader;
pub use nav::NavBar;
