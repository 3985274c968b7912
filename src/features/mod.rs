//! Feature implementations for quickadd.
//!
//! - Natural language quick-add parsing

pub mod nlp;
