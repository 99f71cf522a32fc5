pub mod handlers;
pub mod models;
pub mod origin;
pub mod page;
pub mod router;
pub mod services;

pub use models::*;
pub use router::dashboard_routes;
pub use services::{DeleteService, RefreshService};
