use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The device database has no devices to list.
    DatabaseLoad(String),
    KeyFile(String),
    Device(String),
    Match(String),
    Hwdb(String),
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(format!("{err}"))
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::Match(format!("invalid numeric id: {err}"))
    }
}

impl From<glob::PatternError> for Error {
    fn from(err: glob::PatternError) -> Self {
        Self::Io(format!("invalid glob pattern: {err}"))
    }
}

impl From<glob::GlobError> for Error {
    fn from(err: glob::GlobError) -> Self {
        Self::Io(format!("unreadable path: {err}"))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatabaseLoad(err) => write!(f, "device database: {err}"),
            Self::KeyFile(err) => write!(f, "key file: {err}"),
            Self::Device(err) => write!(f, "device: {err}"),
            Self::Match(err) => write!(f, "device match: {err}"),
            Self::Hwdb(err) => write!(f, "hwdb: {err}"),
            Self::Io(err) => write!(f, "I/O: {err}"),
        }
    }
}

impl std::error::Error for Error {}
