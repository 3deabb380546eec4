pub mod bookings;
pub mod payments;
pub mod requests;
pub mod reviews;
pub mod users;
