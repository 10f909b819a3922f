//! Archiving matched probe images back to the target bucket.

use std::time::{SystemTime, UNIX_EPOCH};

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use uuid::Uuid;

use crate::error::HandlerError;

/// Key prefix under which matched probes are stored.
pub const MATCH_PREFIX: &str = "match/";

/// Seam over the object store used for archiving.
#[allow(async_fn_in_trait)]
pub trait MatchArchive {
    async fn store(
        &self,
        bucket: &str,
        key: &str,
        media_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), HandlerError>;
}

/// Derives the object key for a matched probe from the current time and the
/// data URL's declared image subtype.
pub fn archive_key(subtype: &str) -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    archive_key_at(secs, subtype)
}

// The UUID suffix keeps concurrent matches within the same second from
// overwriting each other.
fn archive_key_at(secs: u64, subtype: &str) -> String {
    format!("{MATCH_PREFIX}{secs}-{}.{subtype}", Uuid::new_v4())
}

/// S3 `PutObject` behind the [`MatchArchive`] seam.
#[derive(Clone)]
pub struct S3Archive {
    client: Client,
}

impl S3Archive {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl MatchArchive for S3Archive {
    async fn store(
        &self,
        bucket: &str,
        key: &str,
        media_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), HandlerError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(media_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map(|_| ())
            .map_err(|err| HandlerError::Archive(DisplayErrorContext(err).to_string()))
    }
}
