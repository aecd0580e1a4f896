pub mod operator;
pub mod robot;
pub mod schedule;
