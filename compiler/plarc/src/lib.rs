//! Plar driver - runs scripts, hosts the REPL and the debug commands.
//!
//! # Architecture
//!
//! ```text
//! arquivo.plar
//!     │
//!     ▼
//! plar_lexer::lex ──► TokenList
//!     │
//!     ▼
//! plar_parse::parse ──► Program
//!     │
//!     ▼
//! plar_eval::Interpreter::run ──► output / Report
//! ```
//!
//! Imports are resolved by [`FsModuleLoader`] relative to the script's
//! directory. Failures at any stage become a [`Report`] rendered to stderr.

pub mod commands;
pub mod config;
pub mod loader;
pub mod reporting;
pub mod tracing_setup;

pub use config::{interpreter_builder, overrides_from_env, Overrides};
pub use loader::FsModuleLoader;
pub use reporting::{Location, Report};
