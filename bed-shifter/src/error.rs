use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedShifterError {
    #[error("malformed line {line_no} in {path}: expected at least 3 whitespace-separated fields, found {found}")]
    MalformedLine { path: String, line_no: usize, found: usize },

    #[error("could not parse coordinate on line {line_no} of {path}: {source}")]
    BadCoordinate {
        path: String,
        line_no: usize,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
