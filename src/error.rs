use std::fmt;

#[derive(Debug)]
pub enum EmojifyError {
    Catalog { entry: String, detail: String },
    Io(std::io::Error),
}

impl fmt::Display for EmojifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmojifyError::Catalog { entry, detail } => {
                write!(f, "malformed catalog entry {:?}: {}", entry, detail)
            }
            EmojifyError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for EmojifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmojifyError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EmojifyError {
    fn from(value: std::io::Error) -> Self {
        EmojifyError::Io(value)
    }
}
