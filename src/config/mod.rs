// This module re-exports important pieces for convenience,
// so we can "use crate::config::*" easily.
pub mod jwt;
pub mod logging;
pub mod types;

pub use jwt::*;
pub use logging::*;
pub use types::*;
