//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Onboard CLI - extract identity fields from client documents.
#[derive(Debug, Parser)]
#[command(name = "onboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload a document and show the extracted fields
    Extract(ExtractArgs),

    /// Show what would be uploaded and how it previews
    Preview(PreviewArgs),

    /// Merge a saved record into a client profile
    Merge(MergeArgs),

    /// Read contact details from a chat message
    Chat(ChatArgs),

    /// Show or change CLI configuration
    Config(ConfigArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Identity document (image or PDF)
    pub file: PathBuf,

    /// Extraction endpoint URL
    #[arg(short, long, env = "EXTRACTION_SERVICE_URL")]
    pub endpoint: Option<String>,

    /// Substitute the mock record if the request fails
    #[arg(long)]
    pub fallback: bool,

    /// Merge the result into this profile JSON file
    #[arg(short, long)]
    pub merge_into: Option<PathBuf>,

    /// Do not draw the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the preview command.
#[derive(Debug, Parser)]
pub struct PreviewArgs {
    /// Document to preview
    pub file: PathBuf,

    /// Print the image data URL instead of the summary
    #[arg(long)]
    pub data_url: bool,
}

/// Arguments for the merge command.
#[derive(Debug, Parser)]
pub struct MergeArgs {
    /// Extracted record (JSON)
    pub record: PathBuf,

    /// Client profile (JSON); missing files start from a blank profile
    pub profile: PathBuf,

    /// Write the merged profile back to the profile file
    #[arg(short, long)]
    pub write: bool,
}

/// Arguments for the chat command.
#[derive(Debug, Parser)]
pub struct ChatArgs {
    /// Message text, e.g. "my name is Jane Doe, email is jane@example.com"
    pub message: String,

    /// Merge the details into this profile JSON file
    #[arg(short, long)]
    pub merge_into: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Set the extraction endpoint
    SetEndpoint {
        /// Endpoint URL, e.g. http://localhost:5000/extract
        url: String,
    },

    /// Enable or disable the mock-record fallback
    SetFallback {
        /// true to substitute the mock record on failure
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command() {
        let cli = Cli::parse_from([
            "onboard",
            "extract",
            "passport.jpg",
            "--endpoint",
            "http://localhost:5001/extract",
            "--fallback",
        ]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.file, PathBuf::from("passport.jpg"));
                assert_eq!(args.endpoint.as_deref(), Some("http://localhost:5001/extract"));
                assert!(args.fallback);
                assert!(args.merge_into.is_none());
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli = Cli::parse_from(["onboard", "preview", "id.png", "--format", "json"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.command, Command::Preview(_)));
    }

    #[test]
    fn test_set_fallback_parses_bool() {
        let cli = Cli::parse_from(["onboard", "config", "set-fallback", "false"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::SetFallback { enabled },
            }) => assert!(!enabled),
            _ => panic!("Expected config set-fallback"),
        }
    }

    #[test]
    fn test_chat_command() {
        let cli = Cli::parse_from([
            "onboard",
            "chat",
            "my phone is 555-123-4567",
            "--merge-into",
            "profile.json",
        ]);
        match cli.command {
            Command::Chat(args) => {
                assert_eq!(args.message, "my phone is 555-123-4567");
                assert_eq!(args.merge_into, Some(PathBuf::from("profile.json")));
            }
            _ => panic!("Expected Chat command"),
        }
    }

    #[test]
    fn test_missing_file_is_rejected() {
        assert!(Cli::try_parse_from(["onboard", "extract"]).is_err());
    }
}
