//! Command execution.

use crate::cli::{Cli, Commands, OutputFormat};
use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;
use summit::{Consultant, ConsultationOutcome, SummitConfig, contract, render};
use summit_core::{GenerationRequest, ImagePart, MediaSource, image_mime_for_extension};

/// Runs the parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let request = match &cli.command {
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&contract::consultation_schema())?);
            return Ok(());
        }
        command => request_for(command, std::io::stdin().lock())?,
    };

    let mut config = SummitConfig::load(cli.config.as_deref())?;
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }

    let consultant = Consultant::from_config(&config)?;
    tracing::info!(mode = %request.mode(), model = %config.model(), "Consulting the panel");

    let outcome = consultant.consult(&request).await?;
    print_outcome(&outcome, cli.format)
}

/// Builds the request a command describes; `stdin` backs `--file -`.
fn request_for(command: &Commands, stdin: impl Read) -> Result<GenerationRequest> {
    let request = match command {
        Commands::Concept { text } => GenerationRequest::fresh(text.clone()),
        Commands::Audit { text, file } => {
            let draft = match (text, file) {
                (Some(text), _) => text.clone(),
                (None, Some(path)) => read_draft(path, stdin)?,
                (None, None) => bail!("audit needs draft text or --file"),
            };
            GenerationRequest::audit(draft)
        }
        Commands::Image { path, note, mime } => {
            GenerationRequest::from_image(read_image(path, mime.as_deref())?, note.clone())
        }
        Commands::Schema => bail!("schema does not build a request"),
    };
    Ok(request)
}

fn read_draft(path: &Path, mut stdin: impl Read) -> Result<String> {
    if path == Path::new("-") {
        let mut draft = String::new();
        stdin
            .read_to_string(&mut draft)
            .context("Failed to read draft from stdin")?;
        return Ok(draft);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read draft {}", path.display()))
}

fn read_image(path: &Path, mime: Option<&str>) -> Result<ImagePart> {
    let mime = match mime {
        Some(mime) => mime.to_string(),
        None => path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(image_mime_for_extension)
            .map(str::to_string)
            .with_context(|| {
                format!(
                    "Cannot infer image type of {}; pass --mime",
                    path.display()
                )
            })?,
    };
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read image {}", path.display()))?;
    Ok(ImagePart::new(mime, MediaSource::Binary(bytes)))
}

fn print_outcome(outcome: &ConsultationOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", render::render_text(outcome.consultation(), outcome.sources()));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(outcome.consultation())?);
        }
    }
    if let Some(usage) = outcome.usage() {
        tracing::info!(
            input_tokens = usage.input_tokens(),
            output_tokens = usage.output_tokens(),
            thinking_tokens = usage.thinking_tokens(),
            "Token usage"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use summit::InvocationBuilder;
    use summit_core::{ContentPart, Mode};

    const PNG_BYTES: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn temp_file(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("temp file");
        file.write_all(contents).expect("write temp file");
        file
    }

    fn no_stdin() -> Cursor<Vec<u8>> {
        Cursor::new(Vec::new())
    }

    #[test]
    fn test_concept_builds_fresh_request() {
        let command = Commands::Concept {
            text: "lo-fi rain".to_string(),
        };
        let request = request_for(&command, no_stdin()).unwrap();
        assert_eq!(*request.mode(), Mode::Fresh);
        assert_eq!(request.text(), "lo-fi rain");
    }

    #[test]
    fn test_audit_reads_draft_from_file() {
        let draft = temp_file(".txt", b"[Verse 1]\nneon lights\n");
        let command = Commands::Audit {
            text: None,
            file: Some(draft.path().to_path_buf()),
        };
        let request = request_for(&command, no_stdin()).unwrap();
        assert_eq!(*request.mode(), Mode::Audit);
        assert_eq!(request.trimmed_text(), "[Verse 1]\nneon lights");
    }

    #[test]
    fn test_audit_dash_reads_stdin() {
        let command = Commands::Audit {
            text: None,
            file: Some("-".into()),
        };
        let stdin = Cursor::new(b"[Chorus]\nsodium glow".to_vec());
        let request = request_for(&command, stdin).unwrap();
        assert_eq!(request.text(), "[Chorus]\nsodium glow");
    }

    #[test]
    fn test_image_mime_is_inferred_from_extension() {
        let image = temp_file(".PNG", &PNG_BYTES);
        let command = Commands::Image {
            path: image.path().to_path_buf(),
            note: "make it sound like this".to_string(),
            mime: None,
        };
        let request = request_for(&command, no_stdin()).unwrap();
        assert_eq!(*request.mode(), Mode::Image);

        let invocation = InvocationBuilder::default().build(&request).unwrap();
        match &invocation.parts()[0] {
            ContentPart::InlineData { mime_type, data } => {
                assert_eq!(mime_type, "image/png");
                assert_eq!(data, "iVBORw0KGgo=");
            }
            other => panic!("Expected inline data, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_extension_needs_mime_override() {
        let image = temp_file(".bin", &PNG_BYTES);

        let err = read_image(image.path(), None).unwrap_err();
        assert!(err.to_string().contains("Cannot infer image type"));

        let part = read_image(image.path(), Some("image/webp")).unwrap();
        assert_eq!(part.mime_type(), "image/webp");
    }

    #[test]
    fn test_missing_image_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_image(&dir.path().join("absent.png"), None).unwrap_err();
        assert!(err.to_string().contains("Failed to read image"));
    }

    #[test]
    fn test_schema_does_not_build_a_request() {
        assert!(request_for(&Commands::Schema, no_stdin()).is_err());
    }
}
