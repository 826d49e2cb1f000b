//! One module per subcommand.  Each exposes an `execute` entry point called
//! from `main::run`.

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;
