//! captcha CLI library.
//!
//! Command implementations for the `captcha` binary, kept in a library so
//! their helpers can be tested directly.

pub mod commands;
pub mod logging;
