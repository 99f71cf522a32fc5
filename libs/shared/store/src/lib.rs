pub mod guard;
pub mod state;
pub mod store;

pub use guard::SubmitGuard;
pub use state::AdminState;
pub use store::{ClinicStore, Snapshot};
