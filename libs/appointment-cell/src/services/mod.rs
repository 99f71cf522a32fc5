pub mod appointment;
pub mod schedule;

pub use appointment::AppointmentService;
pub use schedule::{build_window, AppointmentWindow};
