//! Data carried through a request: the demo token and its claims.

pub mod token;

pub use token::{Claims, DemoToken, TokenError};
