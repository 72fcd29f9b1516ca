//! Error types for huffcode.

use thiserror::Error;

/// Everything that can stop an encode call (or the command line tool) from finishing.
#[derive(Debug, Error)]
pub enum Error {
    /// There was nothing to encode: the input (and so the frequency table) is empty.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// An input symbol has no code in the supplied code table.
    #[error("no code for symbol {symbol}")]
    Lookup { symbol: String },

    /// Reading the input or writing the output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal logger could not be installed.
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// A specialized Result type for huffcode operations.
pub type Result<T> = std::result::Result<T, Error>;
