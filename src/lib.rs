//! Verrazano Roofing site core.
//!
//! The library is presentation independent. `motion` and `widgets` turn
//! measured geometry and pointer input into numbers, `content` owns the
//! blog articles, and `site` maps paths to pages and their metadata.
//! The `verrazano-site` binary (feature `gui`) draws all of it with egui.

pub mod config;
pub mod format;

pub mod motion;
pub mod widgets;

pub mod content;
pub mod site;

pub use config::SiteConfig;
pub use content::{Article, ArticleRepository, ContentError};
pub use site::{PageMeta, Route};
