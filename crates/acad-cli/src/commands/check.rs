use std::path::Path;

use acad_core::requests::{Create, MultipleCreate, QuestionConfig};
use anyhow::Context;
use serde::Serialize;

use crate::cli::{GlobalFlags, Shape};
use crate::output::output;

#[derive(Debug, Serialize)]
struct CheckResponse {
    shape: &'static str,
    valid: bool,
}

/// Deep-validate a payload file. An invalid payload is reported and then
/// returned as an error so the process exits non-zero.
pub fn handle(shape: Shape, file: &Path, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read payload {}", file.display()))?;
    let valid = check_payload(shape, &text)?;

    output(
        &CheckResponse {
            shape: shape_name(shape),
            valid,
        },
        flags.format,
    )?;

    if !valid {
        anyhow::bail!("{} payload is invalid", shape_name(shape));
    }
    Ok(())
}

/// Parse `text` as `shape` and run its validator.
pub fn check_payload(shape: Shape, text: &str) -> anyhow::Result<bool> {
    let valid = match shape {
        Shape::QuestionConfig => serde_json::from_str::<QuestionConfig>(text)
            .context("payload is not a question config")?
            .is_valid(),
        Shape::Create => serde_json::from_str::<Create>(text)
            .context("payload is not a create request")?
            .is_valid(),
        Shape::MultipleCreate => serde_json::from_str::<MultipleCreate>(text)
            .context("payload is not a multiple-create request")?
            .is_valid(),
    };
    tracing::debug!(shape = shape_name(shape), valid, "payload checked");
    Ok(valid)
}

const fn shape_name(shape: Shape) -> &'static str {
    match shape {
        Shape::QuestionConfig => "question_config",
        Shape::Create => "create",
        Shape::MultipleCreate => "multiple_create",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            database: None,
        }
    }

    #[test]
    fn checks_each_shape() {
        let config = r#"{"content": "2+2", "answer": "4", "choice": ["4", "3"]}"#;
        assert!(check_payload(Shape::QuestionConfig, config).unwrap());
        assert!(
            check_payload(
                Shape::Create,
                &format!(r#"{{"examId": 7, "questionConfig": {config}}}"#)
            )
            .unwrap()
        );
        assert!(
            !check_payload(Shape::MultipleCreate, r#"{"examId": 7, "questionConfigs": []}"#)
                .unwrap()
        );
    }

    #[test]
    fn response_reports_shape_and_verdict() {
        let rendered = crate::output::render(
            &CheckResponse {
                shape: shape_name(Shape::MultipleCreate),
                valid: false,
            },
            OutputFormat::Raw,
        )
        .unwrap();
        assert_eq!(rendered, r#"{"shape":"multiple_create","valid":false}"#);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(check_payload(Shape::Create, "{").is_err());
    }

    #[test]
    fn handle_reads_file_and_fails_on_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let valid_path = dir.path().join("valid.json");
        std::fs::write(
            &valid_path,
            r#"{"content": "2+2", "answer": "4", "choice": ["4"]}"#,
        )
        .unwrap();
        assert!(handle(Shape::QuestionConfig, &valid_path, &flags()).is_ok());

        let invalid_path = dir.path().join("invalid.json");
        std::fs::write(&invalid_path, r#"{"content": null, "answer": "4", "choice": ["4"]}"#)
            .unwrap();
        let err = handle(Shape::QuestionConfig, &invalid_path, &flags()).unwrap_err();
        assert!(err.to_string().contains("invalid"));
    }
}
