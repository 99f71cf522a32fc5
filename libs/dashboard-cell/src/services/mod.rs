pub mod delete;
pub mod refresh;

pub use delete::DeleteService;
pub use refresh::RefreshService;
