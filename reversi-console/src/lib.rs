//! Console front end for `reversi-grid`.
//!
//! - [`cli`]: command-line flags
//! - [`config`]: TOML configuration loading and validation
//! - [`connector`]: line-oriented I/O the session talks through
//! - [`input`]: parsing of size and turn lines
//! - [`session`]: the game loop
//! - [`error`]: structured error types

pub mod cli;
pub mod config;
pub mod connector;
pub mod error;
pub mod input;
pub mod session;
