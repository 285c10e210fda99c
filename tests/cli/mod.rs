mod compare;
mod config;
mod divergence;
mod locations;
mod route;
pub mod support;
