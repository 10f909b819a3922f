//! The two handler cores: compare-only, and compare-and-archive.
//!
//! Both run the same pipeline — parse the request, decode the data URL,
//! resolve the reference image, compare, apply the threshold — and differ
//! only in what happens on a match. Failures never bubble up to the runtime;
//! every outcome is rendered as a response with the fixed header set.

use http::StatusCode;
use lambda_http::{Body, Error, Request, Response};
use serde::Deserialize;

use crate::archive::{archive_key, MatchArchive};
use crate::compare::{FaceComparer, Verdict};
use crate::config::TargetImage;
use crate::data_url::DataUrl;
use crate::error::HandlerError;
use crate::response;

/// Wire shape of the POST body. Unknown fields are ignored; a missing
/// `image` defaults to empty and then fails data-URL validation.
#[derive(Debug, Default, Deserialize)]
pub struct ApiRequest {
    #[serde(default)]
    pub image: String,
}

/// Decoded probe plus the reference it was compared against, kept around for
/// the archive step.
struct Probe {
    image: DataUrl,
    target: TargetImage,
}

/// Compare-only variant: decode, compare, answer the verdict.
pub async fn compare_only<C>(event: Request, comparer: &C) -> Result<Response<Body>, Error>
where
    C: FaceComparer,
{
    match run_compare(&event, comparer).await {
        Ok((verdict, _)) => Ok(response::plain(StatusCode::OK, verdict.as_str())),
        Err(err) => Ok(error_response(err)),
    }
}

/// Archiving variant: like [`compare_only`], but a matched probe is written
/// back to the target bucket under the `match/` prefix.
pub async fn compare_and_archive<C, A>(
    event: Request,
    comparer: &C,
    archive: &A,
) -> Result<Response<Body>, Error>
where
    C: FaceComparer,
    A: MatchArchive,
{
    let outcome = async {
        let (verdict, probe) = run_compare(&event, comparer).await?;
        if verdict == Verdict::Match {
            let key = archive_key(probe.image.subtype());
            tracing::info!(%key, "archiving matched probe image");
            let media_type = probe.image.media_type().to_owned();
            archive
                .store(
                    &probe.target.bucket,
                    &key,
                    &media_type,
                    probe.image.into_bytes(),
                )
                .await?;
        }
        Ok(verdict)
    }
    .await;

    match outcome {
        Ok(verdict) => Ok(response::plain(StatusCode::OK, verdict.as_str())),
        Err(err) => Ok(error_response(err)),
    }
}

async fn run_compare<C>(event: &Request, comparer: &C) -> Result<(Verdict, Probe), HandlerError>
where
    C: FaceComparer,
{
    let request = parse_request(event.body());
    let image = DataUrl::parse(&request.image)?;
    let target = TargetImage::from_env()?;

    let matches = comparer.compare(image.bytes(), &target).await?;
    let verdict = Verdict::from_matches(&matches);
    tracing::info!(
        verdict = verdict.as_str(),
        matches = matches.len(),
        "face comparison complete"
    );

    Ok((verdict, Probe { image, target }))
}

// Malformed or non-JSON bodies fall back to the empty request; the empty
// image string is then rejected by data-URL validation.
fn parse_request(body: &Body) -> ApiRequest {
    match body {
        Body::Text(text) => serde_json::from_str(text).unwrap_or_default(),
        Body::Binary(bytes) => serde_json::from_slice(bytes).unwrap_or_default(),
        Body::Empty => ApiRequest::default(),
    }
}

fn error_response(err: HandlerError) -> Response<Body> {
    tracing::error!(error = %err, "invocation failed");
    response::plain(err.status_code(), err.to_string())
}
