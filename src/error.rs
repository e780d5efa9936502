use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineupError {
    /// An act line whose time range cannot be split into a from/to pair.
    #[error("Format error at line {line}: {message}")]
    FormatError { line: usize, message: String },

    /// A stage line before any day, or an act line before any stage.
    #[error("Structure error at line {line}: {message}")]
    StructureError { line: usize, message: String },

    /// A stored clock string that is not "HH:MM" reached the grid math.
    #[error("Invalid time value: {value}")]
    TimeFormat { value: String },
}
