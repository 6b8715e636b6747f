//! Pages
//!
//! Top-level page components for each route.

pub mod app;
pub mod landing;

pub use app::AppPage;
pub use landing::Landing;
