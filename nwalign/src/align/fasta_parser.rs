use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Result, anyhow};
use lib_nwalign::sequence::SequenceRecord;
use log::debug;

/// Parses a multi-record sequence file.
///
/// Each record starts with a `>`-prefixed header line whose remainder is the
/// record name, followed by one or more data lines that are concatenated
/// into the residue string. Blank lines are skipped.
pub fn parse_sequence_file(path: impl AsRef<Path>) -> Result<Vec<SequenceRecord>> {
    let path = path.as_ref();
    debug!("Parsing sequence file {path:?}");

    let file =
        File::open(path).map_err(|error| anyhow!("Unable to open input file {path:?}: {error}"))?;
    parse_sequence_records(BufReader::new(file))
}

pub fn parse_sequence_records(reader: impl BufRead) -> Result<Vec<SequenceRecord>> {
    let mut records = Vec::new();
    let mut current: Option<SequenceRecord> = None;

    for (line_index, line) in reader.lines().enumerate() {
        let line = line
            .map_err(|error| anyhow!("Error reading line {}: {error}", line_index + 1))?;
        let line = line.trim_end();

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }

            let name = header.trim();
            if name.is_empty() {
                return Err(anyhow!(
                    "Sequence header at line {} has no name",
                    line_index + 1
                ));
            }
            current = Some(SequenceRecord::new(name, ""));
        } else if line.is_empty() {
            continue;
        } else {
            match current.as_mut() {
                Some(record) => record.residues.push_str(line),
                None => {
                    return Err(anyhow!(
                        "Found sequence data at line {} before the first header",
                        line_index + 1
                    ));
                }
            }
        }
    }
    if let Some(record) = current.take() {
        records.push(record);
    }

    if records.is_empty() {
        return Err(anyhow!("The input contains no sequence records"));
    }
    Ok(records)
}
