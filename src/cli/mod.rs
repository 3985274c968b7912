//! Command-line front end for quickadd.

pub mod args;
pub mod commands;
