use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Patch ({row}, {col}) out of range for {rows}x{cols} grid")]
    PatchOutOfRange {
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    },

    #[error("Patch unavailable: {0}")]
    PatchUnavailable(String),

    #[error("No patch selected")]
    NoPatchSelected,

    #[error("Invalid slide config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, HistoscopeError>;
