use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::Config;
use crate::core::GenericResult;
use crate::errors::ReportError;

/// Paths of the statements a report is generated from.
#[derive(Debug)]
pub struct InputFiles {
    pub holding: PathBuf,
    pub export: PathBuf,
    pub dividend: PathBuf,
}

impl InputFiles {
    /// Locates all three statements, failing on the first missing one.
    pub fn locate(dir: &Path, config: &Config) -> GenericResult<InputFiles> {
        let locate = |kind: &'static str, prefix: &str| -> GenericResult<PathBuf> {
            find_file(dir, prefix, &config.extension)?.ok_or_else(|| ReportError::MissingFile {
                kind,
                prefix: prefix.to_owned(),
                extension: config.extension.clone(),
                dir: dir.to_owned(),
            }.into())
        };

        Ok(InputFiles {
            holding: locate("holding", &config.holding_prefix)?,
            export: locate("export", &config.export_prefix)?,
            dividend: locate("dividend", &config.dividend_prefix)?,
        })
    }
}

/// Returns the first file of the directory (in enumeration order) whose name starts with the
/// prefix and ends with the extension.
pub fn find_file(dir: &Path, prefix: &str, extension: &str) -> GenericResult<Option<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| format!(
        "Unable to read {:?} directory: {}", dir, e))?;

    let mut matches = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| format!("Unable to read {:?} directory: {}", dir, e))?;
        if entry.file_type()?.is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };

        if name.starts_with(prefix) && name.ends_with(extension) {
            matches.push(entry.path());
        }
    }

    let mut matches = matches.into_iter();
    let Some(path) = matches.next() else {
        return Ok(None);
    };

    let ignored: Vec<PathBuf> = matches.collect();
    if ignored.is_empty() {
        debug!("Using {:?}.", path);
    } else {
        warn!("Found several {}*{} files in {:?}. Using {:?}, ignoring {:?}.",
              prefix, extension, dir, path, ignored);
    }

    Ok(Some(path))
}
