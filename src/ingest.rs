use std::io::Read;
use std::path::Path;

use anyhow::Context;
use csv::{ReaderBuilder, StringRecord};

use crate::models::AttendanceRecord;
use crate::record::{parse_row, HoursPolicy};

#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    pub has_header: bool,
    pub hours_policy: HoursPolicy,
}

#[cfg(test)]
pub fn read_path(path: &Path, options: &IngestOptions) -> anyhow::Result<Vec<AttendanceRecord>> {
    read_path_with_header(path, options, |_| Ok(()))
}

/// Like [`read_path`], handing the header row to `on_header` as soon as it
/// is read and before any data row is parsed.
pub fn read_path_with_header<F>(
    path: &Path,
    options: &IngestOptions,
    on_header: F,
) -> anyhow::Result<Vec<AttendanceRecord>>
where
    F: FnMut(&StringRecord) -> anyhow::Result<()>,
{
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read_from_with_header(file, options, on_header)
}

#[cfg(test)]
pub fn read_from<R: Read>(input: R, options: &IngestOptions) -> anyhow::Result<Vec<AttendanceRecord>> {
    read_from_with_header(input, options, |_| Ok(()))
}

/// Reads every row, stopping at the first one that fails to read or parse.
pub fn read_from_with_header<R, F>(
    input: R,
    options: &IngestOptions,
    mut on_header: F,
) -> anyhow::Result<Vec<AttendanceRecord>>
where
    R: Read,
    F: FnMut(&StringRecord) -> anyhow::Result<()>,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(options.has_header)
        .flexible(true)
        .from_reader(input);

    if options.has_header {
        on_header(reader.headers().context("failed to read header row")?)?;
    }

    let mut records = Vec::new();
    let mut row = StringRecord::new();

    loop {
        let line = reader.position().line();
        let more = reader
            .read_record(&mut row)
            .with_context(|| format!("failed to read CSV row near line {line}"))?;
        if !more {
            break;
        }

        let line = row.position().map_or(line, |position| position.line());
        let fields: Vec<&str> = row.iter().collect();
        let record = parse_row(&fields, options.hours_policy).map_err(|err| {
            let context = match err.field_index() {
                Some(index) => format!("invalid field {index} in row at line {line}"),
                None => format!("invalid row at line {line}"),
            };
            anyhow::Error::new(err).context(context)
        })?;
        tracing::debug!(
            line,
            name = %record.name,
            class = %record.class,
            hours = record.hours,
            category = %record.category,
            "parsed row"
        );
        records.push(record);
    }

    tracing::info!(count = records.len(), "finished reading attendance rows");
    Ok(records)
}
