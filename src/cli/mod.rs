//! CLI command implementations
//!
//! - `session`: the interactive three-phase session (default command)
//! - `simple`: one-shot commands (check, example, import, table)
//! - `config`: configuration and schema commands
//! - `util`: shared argument and output helpers

pub mod config;
pub mod session;
pub mod simple;
pub mod util;

pub use config::{cmd_config, cmd_schema};
pub use session::cmd_session;
pub use simple::{cmd_check, cmd_example, cmd_import, cmd_table};
