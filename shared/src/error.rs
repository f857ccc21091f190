use thiserror::Error;

use crate::capabilities::HttpResult;

/// Why a list fetch produced no options. Never shown to the user; the picker
/// simply stays as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {message}")]
    Transport { message: String },

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("malformed response body: {reason}")]
    Decode { reason: String },
}

/// Turn a shell-reported HTTP outcome into a decoded JSON list.
pub fn decode_list<T>(result: HttpResult) -> Result<Vec<T>, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    let response = result.map_err(|e| FetchError::Transport {
        message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: u16::from(status),
        });
    }

    let body = response.body().map(Vec::as_slice).unwrap_or_default();
    serde_json::from_slice(body).map_err(|e| FetchError::Decode {
        reason: e.to_string(),
    })
}
