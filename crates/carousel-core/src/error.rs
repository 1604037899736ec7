use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Slider structure incomplete: missing {0}")]
    Structure(MissingPart),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A part of the widget the host failed to provide at mount time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPart {
    Track,
    Viewport,
    PrevControl,
    NextControl,
}

impl fmt::Display for MissingPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MissingPart::Track => "track",
            MissingPart::Viewport => "viewport",
            MissingPart::PrevControl => "prev control",
            MissingPart::NextControl => "next control",
        };
        f.write_str(name)
    }
}

impl From<MissingPart> for Error {
    fn from(part: MissingPart) -> Self {
        Error::Structure(part)
    }
}
