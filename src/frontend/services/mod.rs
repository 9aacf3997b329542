//! Frontend services: auth context, session cache, navigation guard.

pub mod context;
pub mod guard;
pub mod session;
