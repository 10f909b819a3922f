//! Face comparison: the service seam, its Rekognition implementation, and the
//! threshold policy turning similarity scores into a verdict.

use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::{Image, S3Object};
use aws_sdk_rekognition::Client;

use crate::config::TargetImage;
use crate::error::HandlerError;

/// Similarity at or above which the probe counts as the same face.
pub const MATCH_THRESHOLD: f32 = 85.0;

/// One entry of the ranked comparison result; similarity is in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMatchEntry {
    pub similarity: f32,
}

/// Seam over the face-comparison service. The probe arrives as raw bytes, the
/// reference as an S3 pointer; the result is ranked best-first.
#[allow(async_fn_in_trait)]
pub trait FaceComparer {
    async fn compare(
        &self,
        probe: &[u8],
        reference: &TargetImage,
    ) -> Result<Vec<FaceMatchEntry>, HandlerError>;
}

/// Binary outcome reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Unmatch,
}

impl Verdict {
    /// Applies the threshold policy. Only the first (best) entry counts; an
    /// empty list is an unmatch.
    pub fn from_matches(matches: &[FaceMatchEntry]) -> Self {
        match matches.first() {
            Some(entry) if entry.similarity >= MATCH_THRESHOLD => Verdict::Match,
            _ => Verdict::Unmatch,
        }
    }

    /// The bare response-body string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Match => "match",
            Verdict::Unmatch => "unmatch",
        }
    }
}

/// Rekognition `CompareFaces` behind the [`FaceComparer`] seam.
#[derive(Clone)]
pub struct RekognitionComparer {
    client: Client,
}

impl RekognitionComparer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl FaceComparer for RekognitionComparer {
    async fn compare(
        &self,
        probe: &[u8],
        reference: &TargetImage,
    ) -> Result<Vec<FaceMatchEntry>, HandlerError> {
        let source = Image::builder().bytes(Blob::new(probe)).build();
        let target = Image::builder()
            .s3_object(
                S3Object::builder()
                    .bucket(reference.bucket.as_str())
                    .name(reference.key.as_str())
                    .build(),
            )
            .build();

        let output = self
            .client
            .compare_faces()
            .source_image(source)
            .target_image(target)
            .send()
            .await
            .map_err(|err| HandlerError::Compare(DisplayErrorContext(err).to_string()))?;

        Ok(output
            .face_matches()
            .iter()
            .map(|entry| FaceMatchEntry {
                similarity: entry.similarity().unwrap_or_default(),
            })
            .collect())
    }
}
