//! Loader for the RON tuning file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::data::GameTuning;

/// Error type for tuning file failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON source. `file` is only used for error messages.
pub fn parse_tuning(source: &str, file: &str) -> Result<GameTuning, TuningLoadError> {
    ron_options()
        .from_str(source)
        .map_err(|e| TuningLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load tuning from `path`.
///
/// A missing file is not an error: the compiled-in defaults are used and a
/// warning is logged. Unreadable or malformed files are errors.
pub fn load_tuning(path: &Path) -> Result<GameTuning, TuningLoadError> {
    let file_name = path.display().to_string();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{} not found, using default tuning", file_name);
            return Ok(GameTuning::default());
        }
        Err(e) => {
            return Err(TuningLoadError {
                file: file_name,
                message: format!("IO error: {}", e),
            });
        }
    };

    let tuning = parse_tuning(&contents, &file_name)?;
    info!(
        "Loaded tuning from {} (schema v{})",
        file_name, tuning.schema_version
    );
    Ok(tuning)
}
