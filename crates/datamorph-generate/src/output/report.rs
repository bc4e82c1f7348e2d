use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::errors::GenerationError;
use crate::model::MaskReport;

use super::{persist, prepare_parent, temp_path};

/// Write the run report as pretty JSON.
pub fn write_report_json(path: &Path, report: &MaskReport) -> Result<(), GenerationError> {
    let data = serde_json::to_vec_pretty(report)?;
    prepare_parent(path)?;
    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(&data)?;
    file.sync_all()?;
    persist(&tmp_path, path)?;
    Ok(())
}
