//! CLI module for shelfdb
//!
//! Provides command-line interface for:
//! - start: open the catalog and serve JSON requests from stdin
//! - list: print the live records and exit

mod args;
mod commands;
mod errors;
mod io;
mod request;

pub use args::{Cli, Command};
pub use commands::{execute, list, list_to, run, run_command, serve, session, start};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_lines, write_error, write_json, write_response};
pub use request::Request;
