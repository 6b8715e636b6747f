//! UI Components
//!
//! The three panels of the app page.

pub mod chat;
pub mod recommendations;
pub mod review;

pub use chat::ChatPanel;
pub use recommendations::RecommendationsPanel;
pub use review::ReviewPanel;
