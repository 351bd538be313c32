//! # CLI Layer
//!
//! One client of the showroom library. This is the only place that parses
//! arguments, writes to stdout/stderr, installs the log subscriber, or turns
//! errors into exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, context setup, one `handle_*` per subcommand
//! - `print`: terminal formatting of `CmdResult` pieces
//! - `logging`: `tracing-subscriber` on stderr

mod commands;
mod logging;
mod print;
mod setup;

pub use commands::run;
