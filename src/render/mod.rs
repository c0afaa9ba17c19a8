//! Template rendering with theme styles.

mod filters;
mod renderer;

pub use renderer::Renderer;
