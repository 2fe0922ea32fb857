//! # CLI Layer
//!
//! The binary's side of argtmpl. It is the only code that:
//! - Parses process arguments (via clap)
//! - Writes to stderr
//! - Chooses exit codes
//!
//! ## Structure
//!
//! - `setup`: clap definitions, option parsing, logging initialization
//! - `commands`: `run()`, the parse → dump → render → write pipeline
//! - `print`: the verbose argument dump and error reporting

pub mod commands;
pub mod print;
pub mod setup;
