//! CLI library components for the Form D normalizer.

pub mod logging;
pub mod output;
