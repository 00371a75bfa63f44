//! Library exports for jobs-app, shared between the binary and tests.

pub mod config;
pub mod models;
pub mod routes;
pub mod startup;
pub mod state;
pub mod utils;
