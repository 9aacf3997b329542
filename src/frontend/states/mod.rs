//! UI state containers.

pub mod calculator;
