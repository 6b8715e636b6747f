//! Client State
//!
//! Session identity and the movie catalog index.

pub mod catalog;
pub mod session;

pub use catalog::CatalogIndex;
