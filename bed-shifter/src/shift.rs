//! Projects BED features between coordinate systems. Grounded on
//! `bed_shifter.py` in `original_source/work/get_subtelomeres`.

use crate::error::BedShifterError;
use common::file_tools::read_lines;
use std::collections::HashMap;
use std::io::Write;

/// One shift-file entry: a `[start, end)` window of the old coordinate
/// system that maps onto `new`. `start >= end` marks a reversed mapping.
#[derive(Debug, Clone)]
pub struct ShiftRecord {
    pub start: i64,
    pub end: i64,
    pub new: String,
}

pub fn read_shift_file(path: &str) -> Result<HashMap<String, Vec<ShiftRecord>>, BedShifterError> {
    let mut shifts: HashMap<String, Vec<ShiftRecord>> = HashMap::new();
    for (line_no, line) in read_lines(path)?.enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(BedShifterError::MalformedLine {
                path: path.to_string(),
                line_no: line_no + 1,
                found: fields.len(),
            });
        }
        let old = fields[0].to_string();
        let new = if fields.len() >= 4 { fields[3].to_string() } else { old.clone() };
        let start = parse_coord(fields[1], path, line_no + 1)?;
        let end = parse_coord(fields[2], path, line_no + 1)?;
        shifts.entry(old).or_default().push(ShiftRecord { start, end, new });
    }
    Ok(shifts)
}

fn parse_coord(field: &str, path: &str, line_no: usize) -> Result<i64, BedShifterError> {
    field.parse().map_err(|source| BedShifterError::BadCoordinate {
        path: path.to_string(),
        line_no,
        source,
    })
}

/// Projects one feature through every shift record registered for its
/// contig, writing zero or more shifted lines.
///
/// The reverse-mapping arithmetic below follows `bed_shifter.py` exactly.
/// For a reversed record and a feature with a strand column, this yields
/// coordinates one base off from the worked example in the written spec
/// (which gives `2 8` where this produces `3 9` for the same inputs); the
/// source's arithmetic is kept rather than the spec's example, see
/// DESIGN.md.
fn shift_feature(feature: &[&str], shifts: &[ShiftRecord], out: &mut impl Write) -> std::io::Result<()> {
    let ostart: i64 = match feature[1].parse() {
        Ok(v) => v,
        Err(_) => return Ok(()),
    };
    let oend: i64 = match feature[2].parse() {
        Ok(v) => v,
        Err(_) => return Ok(()),
    };

    for record in shifts {
        let reverse = record.start >= record.end;
        let (mut start, mut end) = (record.start, record.end);
        let (mut shifted_start, mut shifted_end) = (ostart, oend);

        if reverse {
            (shifted_start, shifted_end) = (shifted_end - 1, shifted_start - 1);
            start = -start;
            end = -end;
            shifted_start = -shifted_start;
            shifted_end = -shifted_end;
        }

        shifted_start = shifted_start.max(start);
        shifted_end = shifted_end.min(end);
        if shifted_start >= shifted_end {
            continue;
        }
        shifted_start -= start;
        shifted_end -= start;

        if reverse && feature.len() >= 6 {
            let strand = match feature[5] {
                "+" => "-",
                "-" => "+",
                other => other,
            };
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}{}{}",
                record.new,
                shifted_start,
                shifted_end,
                feature[3],
                feature[4],
                strand,
                if feature.len() > 6 { "\t" } else { "" },
                feature[6..].join("\t"),
            )?;
        } else {
            let rest = if feature.len() > 3 { feature[3..].join("\t") } else { String::new() };
            writeln!(
                out,
                "{}\t{}\t{}{}{}",
                record.new,
                shifted_start,
                shifted_end,
                if rest.is_empty() { "" } else { "\t" },
                rest,
            )?;
        }
    }
    Ok(())
}

pub fn run_shift(bedfile: &str, shift_file: &str, out: &mut impl Write) -> Result<(), BedShifterError> {
    let shifts = read_shift_file(shift_file)?;
    for (line_no, line) in read_lines(bedfile)?.enumerate() {
        let line = line?;
        let feature: Vec<&str> = line.split_whitespace().collect();
        if feature.len() < 3 {
            return Err(BedShifterError::MalformedLine {
                path: bedfile.to_string(),
                line_no: line_no + 1,
                found: feature.len(),
            });
        }
        if let Some(records) = shifts.get(feature[0]) {
            shift_feature(&feature, records, out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(bed: &str, shifts: &[ShiftRecord]) -> String {
        let feature: Vec<&str> = bed.split_whitespace().collect();
        let mut out = Vec::new();
        shift_feature(&feature, shifts, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn forward_shift_translates_the_window() {
        let shifts = vec![ShiftRecord { start: 48, end: 2391, new: "chrZ".into() }];
        let output = run("chrA\t235\t584", &shifts);
        assert_eq!(output, "chrZ\t187\t536\n");
    }

    #[test]
    fn reversed_shift_toggles_strand_and_swaps_coordinates() {
        let shifts = vec![ShiftRecord { start: 100, end: 0, new: "chrZ".into() }];
        let output = run("chrA\t10\t20\tname\t0\t+", &shifts);
        assert_eq!(output, "chrZ\t81\t91\tname\t0\t-\n");
    }

    #[test]
    fn out_of_bounds_intersection_is_dropped() {
        let shifts = vec![ShiftRecord { start: 1000, end: 2000, new: "chrZ".into() }];
        let output = run("chrA\t0\t10", &shifts);
        assert_eq!(output, "");
    }

    #[test]
    fn partial_intersection_is_clipped() {
        let shifts = vec![ShiftRecord { start: 100, end: 200, new: "chrZ".into() }];
        let output = run("chrA\t50\t150", &shifts);
        assert_eq!(output, "chrZ\t0\t50\n");
    }

    #[test]
    fn multiple_shift_records_emit_multiple_features() {
        let shifts = vec![
            ShiftRecord { start: 0, end: 100, new: "chrY".into() },
            ShiftRecord { start: 50, end: 150, new: "chrZ".into() },
        ];
        let output = run("chrA\t60\t80", &shifts);
        assert_eq!(output, "chrY\t60\t80\nchrZ\t10\t30\n");
    }

    // Pins the §6/§8(f) worked example's inputs (record `A 20 10 B`,
    // feature `A 12 18 name . +`). The written spec's example gives
    // `B 2 8 name . -`; this implementation, following `bed_shifter.py`'s
    // arithmetic, produces `B 3 9 name . -`. See the comment on
    // `shift_feature` and DESIGN.md.
    #[test]
    fn reversed_mapping_matches_source_arithmetic_not_the_written_spec_example() {
        let shifts = vec![ShiftRecord { start: 20, end: 10, new: "B".into() }];
        let output = run("A\t12\t18\tname\t.\t+", &shifts);
        assert_eq!(output, "B\t3\t9\tname\t.\t-\n");
    }

    #[test]
    fn short_shift_record_is_a_malformed_line_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"chrA\t10\n").unwrap();
        match read_shift_file(file.path().to_str().unwrap()) {
            Err(BedShifterError::MalformedLine { line_no, found, .. }) => {
                assert_eq!(line_no, 1);
                assert_eq!(found, 2);
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn short_bed_line_is_a_malformed_line_error() {
        let mut bed = tempfile::NamedTempFile::new().unwrap();
        bed.write_all(b"chrA\t10\n").unwrap();
        let mut shift_file = tempfile::NamedTempFile::new().unwrap();
        shift_file.write_all(b"chrA\t0\t100\tchrZ\n").unwrap();

        let mut out = Vec::new();
        match run_shift(bed.path().to_str().unwrap(), shift_file.path().to_str().unwrap(), &mut out) {
            Err(BedShifterError::MalformedLine { line_no, found, .. }) => {
                assert_eq!(line_no, 1);
                assert_eq!(found, 2);
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }
}
