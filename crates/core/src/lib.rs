//! # Robot Ops Core
//!
//! Domain model and rules for managing a robot fleet, the operators trained on
//! it, and the booking schedule that pairs them for a project and time window.
//!
//! Storage sits behind the [`store::EntityStore`] trait; everything here is
//! written against that trait so the rules can be exercised without a
//! database.

pub mod availability;
pub mod errors;
pub mod mock;
pub mod models;
pub mod qualification;
pub mod registry;
pub mod schedule;
pub mod session;
pub mod store;
pub mod validator;
