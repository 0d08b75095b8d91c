use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::experiment::ExperimentResult;

#[derive(Serialize)]
struct ReportDocument<'a> {
    scenario: &'a str,
    #[serde(flatten)]
    result: &'a ExperimentResult,
}

/// Writes experiment results as pretty-printed JSON.
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn write(&self, scenario: &str, result: &ExperimentResult) -> Result<PathBuf> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&ReportDocument { scenario, result })?;
        fs::write(&self.path, json)?;
        Ok(self.path.clone())
    }
}
