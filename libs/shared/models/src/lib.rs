pub mod adapter;
pub mod error;
pub mod resources;

pub use error::AppError;
pub use resources::*;
