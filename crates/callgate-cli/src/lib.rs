//! Callgate CLI library — command implementations shared by the binary and
//! its integration tests.

pub mod commands;
pub mod demo;
