pub mod availability;
pub mod reservation;

pub use availability::{Availability, TimeRange};
pub use reservation::{Reservation, reserve};
