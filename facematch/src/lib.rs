//! Face-match verdicts for API Gateway proxy events.
//!
//! A request carries one base64-encoded probe image as a data URL. The probe
//! is compared against a reference image living in S3 and the caller gets a
//! bare `"match"` / `"unmatch"` string back. Two handler cores are exposed:
//! [`handler::compare_only`] and [`handler::compare_and_archive`], the latter
//! writing matched probes back to the target bucket.
//!
//! The comparison and storage collaborators sit behind the [`FaceComparer`]
//! and [`MatchArchive`] traits so the handlers can be exercised without AWS.

pub mod archive;
pub mod compare;
pub mod config;
pub mod data_url;
pub mod error;
pub mod handler;
pub mod response;

pub use crate::archive::{MatchArchive, S3Archive};
pub use crate::compare::{FaceComparer, FaceMatchEntry, RekognitionComparer, Verdict};
pub use crate::config::TargetImage;
pub use crate::data_url::DataUrl;
pub use crate::error::HandlerError;
