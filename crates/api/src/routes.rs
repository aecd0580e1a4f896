pub mod bookings;
pub mod health;
pub mod operators;
pub mod robots;
pub mod session;
pub mod status;
