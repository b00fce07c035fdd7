//
// Errors
//
use std::error;
use std::fmt;
use std::io;
use std::result;

/// Type alias for co-occurrence analysis errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for many kinds of errors occuring as part of an analysis run
#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    MissingFile(&'static str, Option<io::Error>),
    Catalog(String),
    UnknownTest(String),
    InvalidConfig(String),
    Segmentation(String),
    WorkerPool(String),
    Json(serde_json::Error),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::MissingFile(ref info, ref opt_err) => {
                write!(f,
                    "The {} must already exist at this point but there was a problem opening it. \
                    Wrong path? The OS error was: ",
                    info)?;
                if let Some(ref err) = *opt_err { fmt::Display::fmt(err, f) }
                else { write!(f, "Unknown") }
            },
            Error::Catalog(ref info) => write!(f, "Malformed test catalog: {}", info),
            Error::UnknownTest(ref name) => {
                write!(f, "Test {} is not part of the test catalog", name)
            },
            Error::InvalidConfig(ref info) => write!(f, "Invalid configuration: {}", info),
            Error::Segmentation(ref info) => write!(f, "Sentence segmentation failed: {}", info),
            Error::WorkerPool(ref info) => write!(f, "Worker pool failure: {}", info),
            Error::Json(ref err) => write!(f, "JSON error: {}", err),
            Error::Other(ref info) => write!(f, "{}", info),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IOError(ref err) => Some(err),
            Error::MissingFile(_, Some(ref err)) => Some(err),
            Error::Json(ref err) => Some(err),
            _ => None,
        }
    }
}

impl Error {
    /// Whether the run can carry on after this error (only per-post segmentation can)
    pub fn is_recoverable(&self) -> bool {
        matches!(*self, Error::Segmentation(_))
    }
}

//
// Convert everything else into Error
//
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error::WorkerPool(err.to_string())
    }
}
impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::IOError(err.error)
    }
}

//
// Convert Error into a general io Error
//
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}
