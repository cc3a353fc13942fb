use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unknown team label {label:?} on data record {line}")]
    MalformedTeamLabel { label: String, line: u64 },

    #[error("Failed to read layer sheet: {0}")]
    Read(#[from] csv::Error),
}
