//! Data-URL parsing for the inbound probe image.
//!
//! The wire format is `<mime-prefix>,<base64 payload>`, e.g.
//! `data:image/jpeg;base64,/9j/4AAQ...`. A missing comma or an undecodable
//! payload is rejected up front instead of letting degenerate bytes reach the
//! comparison service.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::HandlerError;

/// A parsed data URL: declared media type plus decoded payload bytes.
#[derive(Debug, Clone)]
pub struct DataUrl {
    media_type: String,
    bytes: Vec<u8>,
}

impl DataUrl {
    /// Splits on the first comma and base64-decodes the payload half.
    pub fn parse(raw: &str) -> Result<Self, HandlerError> {
        let (prefix, payload) = raw.split_once(',').ok_or_else(|| {
            HandlerError::InvalidInput("image string has no comma separator".into())
        })?;

        let bytes = STANDARD.decode(payload).map_err(|err| {
            HandlerError::InvalidInput(format!("image payload is not valid base64: {err}"))
        })?;

        // "data:image/jpeg;base64" -> "image/jpeg"
        let media_type = prefix
            .strip_prefix("data:")
            .unwrap_or(prefix)
            .split(';')
            .next()
            .unwrap_or_default()
            .to_owned();

        Ok(DataUrl { media_type, bytes })
    }

    /// The declared media type, e.g. `image/jpeg`.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// The subtype half of the media type (`jpeg` for `image/jpeg`), used to
    /// pick the archive file extension. Falls back to `bin` when the prefix
    /// declares none.
    pub fn subtype(&self) -> &str {
        self.media_type
            .split_once('/')
            .map(|(_, subtype)| subtype)
            .filter(|subtype| !subtype.is_empty())
            .unwrap_or("bin")
    }

    /// The decoded probe bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the URL, yielding the decoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
