//! Wire format of upstream responses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::settings::ResponseFormat;
use crate::error::{FetchError, FetchResult};

/// Discriminator value that marks a successful envelope.
pub const SUCCESS_MESSAGE: &str = "Success";

/// The `{message, data}` wrapper every upstream and proxy response uses.
///
/// The original backend serializes these fields in PascalCase, so both
/// spellings are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(alias = "Message")]
    pub message: Option<String>,
    #[serde(alias = "Data")]
    pub data: Option<Vec<T>>,
}

impl<T> Envelope<T> {
    /// A successful envelope carrying `data`.
    #[must_use]
    pub fn success(data: Vec<T>) -> Self {
        Self {
            message: Some(SUCCESS_MESSAGE.to_string()),
            data: Some(data),
        }
    }

    /// A failed envelope with an empty payload.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: Some(Vec::new()),
        }
    }

    /// Check the discriminator and unwrap the payload.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Rejected`] when the discriminator is absent or not
    /// `"Success"`, and [`FetchError::Malformed`] when a successful envelope
    /// has no payload.
    pub fn into_result(self, context: &'static str) -> FetchResult<Vec<T>> {
        match self.message.as_deref() {
            Some(SUCCESS_MESSAGE) => self
                .data
                .ok_or_else(|| FetchError::malformed("successful envelope without data")),
            other => Err(FetchError::rejected(context, other)),
        }
    }
}

/// Decode a response body into the payload of a successful envelope.
///
/// # Errors
///
/// Returns [`FetchError::Malformed`] for bodies that are not a valid envelope
/// of `T`, and the errors of [`Envelope::into_result`] otherwise.
pub fn decode_envelope<T>(body: &[u8], context: &'static str) -> FetchResult<Vec<T>>
where
    T: DeserializeOwned,
{
    let envelope: Envelope<T> =
        serde_json::from_slice(body).map_err(|err| FetchError::malformed(err.to_string()))?;
    envelope.into_result(context)
}

/// Decode a bare JSON array body.
///
/// # Errors
///
/// Returns [`FetchError::Malformed`] for anything that is not an array of `T`,
/// including an envelope object.
pub fn decode_bare<T>(body: &[u8]) -> FetchResult<Vec<T>>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|err| FetchError::malformed(err.to_string()))
}

/// Decode `body` according to `format`.
///
/// # Errors
///
/// See [`decode_envelope`] and [`decode_bare`].
pub fn decode_payload<T>(
    body: &[u8],
    format: ResponseFormat,
    context: &'static str,
) -> FetchResult<Vec<T>>
where
    T: DeserializeOwned,
{
    match format {
        ResponseFormat::Envelope => decode_envelope(body, context),
        ResponseFormat::Bare => decode_bare(body),
    }
}
