use std::fmt;
use oracle_api::Error as Transport;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Poll(Transport),
    Search(Transport),
    Detail(Transport),
}

impl Error {
    pub fn transport(&self) -> &Transport {
        match self {
            Error::Poll(e)   => e,
            Error::Search(e) => e,
            Error::Detail(e) => e,
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::Poll(e)   => write!(f, "cannot connect to server: {}", e),
            Error::Search(e) => write!(f, "search failed: {}", e),
            Error::Detail(e) => write!(f, "detail fetch failed: {}", e),
        }
    }
}
