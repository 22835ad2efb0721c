//! View module
//!
//! Server-rendered HTML for the journal page.

pub mod renderer;

pub use renderer::render_page;
