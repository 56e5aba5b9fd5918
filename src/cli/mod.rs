//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the composition root
//! and one handler per subcommand.

pub mod app;
pub mod args;
pub mod clip_cmd;
pub mod config_cmd;
pub mod presenter;
pub mod snapshot_cmd;
pub mod speak_cmd;

// Re-export commonly used types
pub use app::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{ClipAction, Cli, Commands, ConfigAction};
pub use presenter::Presenter;
