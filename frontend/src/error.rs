use thiserror::Error;

/// A failed Bitcoin price fetch.
///
/// Every variant means the same thing to the page: the rate snapshot stays
/// as it was.
#[derive(Error, Debug)]
pub enum RateError {
    #[error("network error: {0}")]
    Network(String),

    #[error("price API returned HTTP {0}")]
    Status(u16),

    #[error("unexpected price payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<gloo_net::Error> for RateError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => RateError::Decode(err),
            other => RateError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            RateError::Status(503).to_string(),
            "price API returned HTTP 503"
        );
        assert_eq!(
            RateError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
        let decode = serde_json::from_str::<u32>("{}").unwrap_err();
        assert!(RateError::from(decode)
            .to_string()
            .starts_with("unexpected price payload"));
    }
}
