//! Command modules for the expt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod init;
pub mod lex;

// Re-export command types and functions
pub use init::{run_init, InitArgs};
pub use lex::{run_lex, LexArgs};
