//! Site shell: routing, page metadata, home page data.

pub mod route;
pub mod seo;
pub mod home;

pub use route::Route;
pub use seo::{breadcrumbs, Breadcrumb, PageMeta};
