use std::path::Path;
use std::sync::Arc;

use gobstones_lang_miette_util::SourceFile;
use gobstones_lang_syntax::Module;

use crate::result::DriverError;

/// Read a syntax tree that the parser serialized to JSON.
pub fn load_module(path: &Path) -> Result<Module, DriverError> {
    log::debug!("Loading syntax tree from {}", path.display());
    let text = read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|err| DriverError::Json { path: path.to_path_buf(), source: Arc::new(err) })
}

/// Read the source text that a syntax tree was parsed from.
pub fn load_source(path: &Path) -> Result<SourceFile, DriverError> {
    let text = read_to_string(path)?;
    Ok(SourceFile::new(path.display().to_string(), text))
}

fn read_to_string(path: &Path) -> Result<String, DriverError> {
    std::fs::read_to_string(path)
        .map_err(|err| DriverError::Io { path: path.to_path_buf(), source: Arc::new(err) })
}
