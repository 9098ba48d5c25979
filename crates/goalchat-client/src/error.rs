use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway returned HTTP {0}")]
    Status(u16),

    #[error("gateway request failed: {0}")]
    Transport(String),

    #[error("gateway response could not be decoded: {0}")]
    Decode(String),

    #[error("gateway reply carried no assistant turn")]
    MissingReply,
}

impl From<ureq::Error> for GatewayError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(status) => GatewayError::Status(status),
            other => GatewayError::Transport(other.to_string()),
        }
    }
}
