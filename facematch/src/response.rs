//! Response construction with the fixed header set.

use http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use http::StatusCode;
use lambda_http::{Body, Response};

/// Builds a bare-string response carrying the fixed CORS/content-type
/// headers. Every code path answers through here so the header set stays
/// identical across outcomes.
pub fn plain(status: StatusCode, body: impl Into<String>) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(
            ACCESS_CONTROL_ALLOW_HEADERS,
            "origin,Accept,Authorization,Content-Type",
        )
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(body.into()))
        .expect("unable to build http::Response")
}
