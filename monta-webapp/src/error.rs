#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Error {
    #[display("Browser storage is unavailable: {_0}")]
    Unavailable(String),
    #[display("Failed to read key {_0}: {_1}")]
    Read(&'static str, String),
    #[display("Failed to write key {_0}: {_1}")]
    Write(&'static str, String),
    #[display("Failed to remove key {_0}: {_1}")]
    Remove(&'static str, String),
}

impl std::error::Error for Error {}

impl Error {
    pub fn key(&self) -> Option<&'static str> {
        use Error::*;
        match self {
            Unavailable(_) => None,
            Read(key, _) | Write(key, _) | Remove(key, _) => Some(*key),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_backend_message() {
        let err = Error::Write("access_token", "QuotaExceededError".into());
        assert_eq!(
            err.to_string(),
            "Failed to write key access_token: QuotaExceededError"
        );
        assert_eq!(err.key(), Some("access_token"));
    }

    #[test]
    fn unavailable_has_no_key() {
        let err = Error::Unavailable("no window".into());
        assert_eq!(err.to_string(), "Browser storage is unavailable: no window");
        assert_eq!(err.key(), None);
    }
}
