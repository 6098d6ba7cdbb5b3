//! JSON semantic-model loader.
//!
//! The program loader writes the resolved model as JSON; an unknown type or
//! object tag is rejected here, before extraction starts.

use crate::errors::{invalid_model, io_error, Result};
use apisurf_core::model::Program;
use std::fs;
use std::path::Path;

/// Load a program model from a JSON file.
///
/// # Errors
///
/// `Io` if the file cannot be read, `InvalidModel` if it does not
/// deserialize into the closed model types.
pub fn load_program(path: &Path) -> Result<Program> {
    let content = fs::read_to_string(path).map_err(|e| io_error("load_program", path, e))?;
    let program = parse_program_str(&content, path)?;
    tracing::debug!(
        model = %path.display(),
        packages = program.packages.len(),
        "program model loaded"
    );
    Ok(program)
}

/// Parse a program model; `origin` is only used for error context.
pub fn parse_program_str(content: &str, origin: &Path) -> Result<Program> {
    serde_json::from_str(content).map_err(|e| invalid_model(origin, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use apisurf_core::ExErrorKind;

    #[test]
    fn test_parse_minimal_program() {
        let program = parse_program_str(
            r#"{"packages": [{"path": "x", "name": "x"}]}"#,
            Path::new("model.json"),
        )
        .unwrap();
        assert_eq!(program.packages.len(), 1);
        assert!(program.packages[0].objects.is_empty());
    }

    #[test]
    fn test_unknown_type_tag_is_invalid_model() {
        let err = parse_program_str(
            r#"{"packages": [{"path": "x", "name": "x", "objects": [
                {"name": "V", "decl": {"kind": "var", "ty": {"type": "union"}}}
            ]}]}"#,
            Path::new("model.json"),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidModel);
        assert_eq!(err.path(), Some("model.json"));
    }
}
