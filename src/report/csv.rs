use crate::error::Result;
use crate::types::department::DepartmentRecord;
use crate::types::scoring::format_score;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const CSV_HEADER: [&str; 5] = [
    "Department",
    "Current_Tool",
    "Pain_Point",
    "Recommended_Tool",
    "Tool_Score",
];

pub fn write_records(records: &[DepartmentRecord], writer: impl Write) -> Result<()> {
    let mut csv = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(CSV_HEADER)?;
    for record in records {
        csv.write_record([
            record.department.as_str(),
            record.current_tool.as_str(),
            record.pain_point.as_str(),
            record.recommended_tool.as_str(),
            format_score(record.tool_score).as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Creates or overwrites `path` with the header row and one row per department.
pub fn write_csv(path: &Path, records: &[DepartmentRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_records(records, file)?;
    tracing::info!(path = %path.display(), rows = records.len(), "csv report written");
    Ok(())
}
