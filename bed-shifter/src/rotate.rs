//! Rotates BED features whose line mentions `END`. Grounded on
//! `rotate_end.py` in `original_source/work/get_subtelomeres`, meant to
//! run ahead of `shift` in a pipeline.

use crate::error::BedShifterError;
use common::file_tools::read_lines;
use std::io::Write;

pub fn run_rotate_end(bedfile: &str, out: &mut impl Write) -> Result<(), BedShifterError> {
    for (line_no, line) in read_lines(bedfile)?.enumerate() {
        let line = line?;
        let feature: Vec<&str> = line.split_whitespace().collect();
        if feature.len() < 3 {
            continue;
        }
        let start: i64 = feature[1].parse().map_err(|source| BedShifterError::BadCoordinate {
            path: bedfile.to_string(),
            line_no: line_no + 1,
            source,
        })?;
        let end: i64 = feature[2].parse().map_err(|source| BedShifterError::BadCoordinate {
            path: bedfile.to_string(),
            line_no: line_no + 1,
            source,
        })?;

        let (start, end) = if line.contains("END") { (end - 1, start - 1) } else { (start, end) };

        let rest = if feature.len() > 3 { feature[3..].join("\t") } else { String::new() };
        writeln!(
            out,
            "{}\t{}\t{}{}{}",
            feature[0],
            start,
            end,
            if rest.is_empty() { "" } else { "\t" },
            rest,
        )?;
    }
    Ok(())
}
