//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// chatdesk - clipboard, speech and snapshot helpers for chat apps
#[derive(Parser, Debug)]
#[command(name = "chatdesk")]
#[command(version)]
#[command(about = "Clipboard, text-to-speech and snapshot helpers for chat apps")]
#[command(long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Clipboard backend (arboard, wayland, memory)
    #[arg(long, value_name = "BACKEND", global = true)]
    pub clipboard_backend: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read and write the system clipboard
    Clip {
        #[command(subcommand)]
        action: ClipAction,
    },
    /// Speak text aloud (Ctrl-C stops)
    Speak {
        /// Text to speak
        #[arg(value_name = "TEXT", required_unless_present = "from_clipboard")]
        text: Option<String>,

        /// Speak the clipboard text instead
        #[arg(short = 'c', long, conflicts_with = "text")]
        from_clipboard: bool,

        /// Voice identifier for this run only
        #[arg(long, value_name = "ID")]
        voice: Option<String>,
    },
    /// List available voices, preferred language first
    Voices {
        /// Remember a voice as the default
        #[arg(long, value_name = "ID")]
        select: Option<String>,
    },
    /// Render the gradient badge to a PNG file
    Snapshot {
        /// Output PNG path
        #[arg(short = 'o', long, value_name = "FILE")]
        out: PathBuf,

        /// Pixels per point
        #[arg(short = 's', long, default_value_t = 2.0)]
        scale: f32,

        /// Use the animated gradient
        #[arg(long)]
        moving: bool,

        /// Let the animation run before capturing
        #[arg(long, value_name = "MS", default_value_t = 0, requires = "moving")]
        after_ms: u64,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Clipboard actions
#[derive(Subcommand, Debug)]
pub enum ClipAction {
    /// Replace the clipboard text
    Copy {
        /// Text to copy
        text: String,
    },
    /// Print the clipboard text
    Paste,
    /// Show or save the clipboard image
    Image {
        /// Save the image as PNG
        #[arg(short = 'o', long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "voice_identifier",
    "speech.engine",
    "speech.preferred_language",
    "speech.engine_bin",
    "speech.audio_session",
    "clipboard.backend",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_speak_text() {
        let cli = Cli::parse_from(["chatdesk", "speak", "你好"]);
        match cli.command {
            Commands::Speak {
                text,
                from_clipboard,
                voice,
            } => {
                assert_eq!(text, Some("你好".to_string()));
                assert!(!from_clipboard);
                assert!(voice.is_none());
            }
            other => panic!("Expected Speak command, got {:?}", other),
        }
    }

    #[test]
    fn cli_parses_speak_from_clipboard() {
        let cli = Cli::parse_from(["chatdesk", "speak", "-c", "--voice", "cmn"]);
        assert!(matches!(
            cli.command,
            Commands::Speak {
                text: None,
                from_clipboard: true,
                voice: Some(_),
            }
        ));
    }

    #[test]
    fn speak_needs_text_or_clipboard() {
        assert!(Cli::try_parse_from(["chatdesk", "speak"]).is_err());
        assert!(Cli::try_parse_from(["chatdesk", "speak", "hi", "-c"]).is_err());
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["chatdesk", "clip", "paste", "-v", "--clipboard-backend", "memory"]);
        assert!(cli.verbose);
        assert_eq!(cli.clipboard_backend, Some("memory".to_string()));
        assert!(matches!(
            cli.command,
            Commands::Clip {
                action: ClipAction::Paste
            }
        ));
    }

    #[test]
    fn cli_parses_snapshot() {
        let cli = Cli::parse_from(["chatdesk", "snapshot", "-o", "badge.png", "--moving"]);
        match cli.command {
            Commands::Snapshot {
                out,
                scale,
                moving,
                after_ms,
            } => {
                assert_eq!(out, PathBuf::from("badge.png"));
                assert_eq!(scale, 2.0);
                assert!(moving);
                assert_eq!(after_ms, 0);
            }
            other => panic!("Expected Snapshot command, got {:?}", other),
        }
    }

    #[test]
    fn after_ms_requires_moving() {
        assert!(Cli::try_parse_from(["chatdesk", "snapshot", "-o", "x.png", "--after-ms", "10"]).is_err());
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["chatdesk", "config", "set", "voice_identifier", "cmn"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "voice_identifier");
            assert_eq!(value, "cmn");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("voice_identifier"));
        assert!(is_valid_config_key("speech.audio_session"));
        assert!(is_valid_config_key("clipboard.backend"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
