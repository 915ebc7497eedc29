use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    App(String, u16),
    Status(u16),
    Timeout,
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            _ if err.is_timeout() => Error::Timeout,
            Some(status)          => Error::Status(status.as_u16()),
            None                  => Error::Other(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::Other(err.to_string())
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::App(msg, code) => write!(f, "server error {}: {}", code, msg),
            Error::Status(code)   => write!(f, "unexpected status {}", code),
            Error::Timeout        => write!(f, "request timed out"),
            Error::Other(msg)     => write!(f, "{}", msg),
        }
    }
}
