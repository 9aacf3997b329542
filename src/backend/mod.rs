//! Integration with the hosted backend platform.

pub mod api;
