//! turtle-logo — a Logo-like turtle graphics interpreter.

pub mod config;
pub mod lang;
pub mod report;
pub mod turtle;
