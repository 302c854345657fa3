//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Summit: a production consultancy board for generative music prompts.
#[derive(Debug, Parser)]
#[command(name = "summit", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to summit.toml in the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the model identifier
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable phases
    Text,
    /// The consultation as JSON, in the schema's field names
    Json,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a production from a raw concept or genre idea
    Concept {
        /// The concept, e.g. "melancholic prog-rock ballad, heavy reverb"
        text: String,
    },

    /// Audit and rewrite an existing draft
    #[command(alias = "review")]
    Audit {
        /// Draft text
        #[arg(conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,

        /// Read the draft from a file ("-" for stdin)
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Translate an image into a production
    Image {
        /// Image file (png, jpeg, webp, gif, heic, heif)
        path: PathBuf,

        /// Optional note to accompany the image
        #[arg(long, default_value = "")]
        note: String,

        /// Override the MIME type inferred from the file extension
        #[arg(long)]
        mime: Option<String>,
    },

    /// Print the output schema declared to the model
    Schema,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_is_an_alias_for_audit() {
        let cli = Cli::try_parse_from(["summit", "review", "[Verse 1] neon lights"]).unwrap();
        match cli.command {
            Commands::Audit { text, file } => {
                assert_eq!(text.as_deref(), Some("[Verse 1] neon lights"));
                assert!(file.is_none());
            }
            other => panic!("Expected audit, got {:?}", other),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "summit", "image", "cover.jpg", "--note", "moody", "--format", "json", "--model",
            "gemini-x",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.model.as_deref(), Some("gemini-x"));
        match cli.command {
            Commands::Image { path, note, mime } => {
                assert_eq!(path, PathBuf::from("cover.jpg"));
                assert_eq!(note, "moody");
                assert!(mime.is_none());
            }
            other => panic!("Expected image, got {:?}", other),
        }
    }

    #[test]
    fn test_audit_needs_exactly_one_draft_source() {
        assert!(Cli::try_parse_from(["summit", "audit"]).is_err());
        assert!(Cli::try_parse_from(["summit", "audit", "draft", "--file", "d.txt"]).is_err());
        assert!(Cli::try_parse_from(["summit", "audit", "--file", "-"]).is_ok());
    }

    #[test]
    fn test_schema_takes_no_arguments() {
        let cli = Cli::try_parse_from(["summit", "schema"]).unwrap();
        assert!(matches!(cli.command, Commands::Schema));
    }
}
