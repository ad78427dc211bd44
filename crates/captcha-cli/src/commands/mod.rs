//! CLI command implementations

pub mod font_check;
pub mod generate;
