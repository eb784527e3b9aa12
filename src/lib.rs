pub mod cli;
pub mod config;
pub mod edge;
pub mod error;
pub mod navigation;
pub mod services;

pub use error::EdgeError;
pub use navigation::{resolve, BreadcrumbItem, Breadcrumbs, RouteLabels};
