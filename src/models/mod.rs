//! Typed mirror of the hosted database schema.
//!
//! These rows live in the backend platform; this crate only reads and writes
//! them over its JSON API.

pub use calculation::*;
pub use profile::*;
pub use session::*;
pub use subscription::*;

mod calculation;
mod profile;
mod session;
mod subscription;
