//! Command implementations for campus

pub mod compare;
pub mod dispatch;
pub mod divergence;
pub mod locations;
pub mod route;
