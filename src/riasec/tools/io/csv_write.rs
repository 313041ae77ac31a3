use std::path::Path;

use crate::riasec::tools::error::Result;
use crate::riasec::tools::flatten::QuestionRow;

/// Writes the provided rows to the given path, with the header derived from
/// the row serialization names. Overwrites any existing file.
pub fn write_rows(path: &Path, rows: &[QuestionRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}
