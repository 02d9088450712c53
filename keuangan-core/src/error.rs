use std::fmt;

#[derive(Debug)]
pub enum KeuanganError {
    Json(serde_json::Error),
    Io(std::io::Error),
    Date(time::error::Parse),
    InvalidAmount(String),
    InvalidPageSize(u32),
    Config(String),
}

impl fmt::Display for KeuanganError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeuanganError::Json(e) => write!(f, "JSON parsing error: {}", e),
            KeuanganError::Io(e) => write!(f, "IO error: {}", e),
            KeuanganError::Date(e) => write!(f, "Invalid date: {}", e),
            KeuanganError::InvalidAmount(s) => write!(f, "Invalid amount: '{}'", s),
            KeuanganError::InvalidPageSize(n) => {
                write!(f, "Invalid page size {} (expected one of 5, 10, 20, 50)", n)
            }
            KeuanganError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for KeuanganError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KeuanganError::Json(e) => Some(e),
            KeuanganError::Io(e) => Some(e),
            KeuanganError::Date(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for KeuanganError {
    fn from(err: serde_json::Error) -> Self {
        KeuanganError::Json(err)
    }
}

impl From<std::io::Error> for KeuanganError {
    fn from(err: std::io::Error) -> Self {
        KeuanganError::Io(err)
    }
}

impl From<time::error::Parse> for KeuanganError {
    fn from(err: time::error::Parse) -> Self {
        KeuanganError::Date(err)
    }
}
