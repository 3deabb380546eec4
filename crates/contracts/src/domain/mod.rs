pub mod booking;
pub mod payment;
pub mod request;
pub mod review;
pub mod user;
