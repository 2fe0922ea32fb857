//! # argtmpl
//!
//! Renders one template file using `key=value` arguments from the command line.
//!
//! ```text
//! argtmpl -a name=world -a shout page.txt
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses options, initializes logging, prints the dump     │
//! │  - The ONLY place that knows about stderr and exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (args.rs, render.rs, config.rs)                    │
//! │  - raw strings → Arguments → rendered String                │
//! │  - Returns structured errors, never exits                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline is strictly sequential: [`args::parse_args`] builds the mapping,
//! [`render::TemplateDocument`] loads and executes the template into a buffer,
//! and [`render::write_output`] flushes that buffer. Every failure is wrapped
//! once into an [`error::ArgtmplError`] and propagated to the caller.
//!
//! ## Module Overview
//!
//! - [`args`]: Raw argument parsing and the [`args::Arguments`] mapping
//! - [`render`]: Template loading, execution and output
//! - [`config`]: Engine settings ([`config::RenderConfig`])
//! - [`error`]: Error types

pub mod args;
pub mod config;
pub mod error;
pub mod render;

pub use args::{parse_args, Arguments};
pub use config::{RenderConfig, UndefinedMode};
pub use error::{ArgtmplError, Result};
pub use render::{render_file, write_output, TemplateDocument};
