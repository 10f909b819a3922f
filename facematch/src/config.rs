//! Reference-image configuration.

use std::env;

use crate::error::HandlerError;

/// Environment variable naming the bucket holding the reference image.
pub const TARGET_IMAGE_NAME: &str = "TARGET_IMAGE_NAME";
/// Environment variable naming the reference image's object key.
pub const TARGET_IMAGE_KEY: &str = "TARGET_IMAGE_KEY";

/// Location of the reference image in S3, resolved from the environment at
/// invocation time. Never mutated by the handlers, only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetImage {
    pub bucket: String,
    pub key: String,
}

impl TargetImage {
    pub fn from_env() -> Result<Self, HandlerError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HandlerError> {
        let bucket = lookup(TARGET_IMAGE_NAME).ok_or(HandlerError::Config(TARGET_IMAGE_NAME))?;
        let key = lookup(TARGET_IMAGE_KEY).ok_or(HandlerError::Config(TARGET_IMAGE_KEY))?;
        Ok(TargetImage { bucket, key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_bucket_and_key() {
        let target = TargetImage::from_lookup(|name| match name {
            TARGET_IMAGE_NAME => Some("probe-bucket".to_owned()),
            TARGET_IMAGE_KEY => Some("reference/door.jpg".to_owned()),
            _ => None,
        })
        .expect("failed to resolve target image");
        assert_eq!(target.bucket, "probe-bucket");
        assert_eq!(target.key, "reference/door.jpg");
    }

    #[test]
    fn missing_bucket_names_the_variable() {
        let err = TargetImage::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, HandlerError::Config(TARGET_IMAGE_NAME)));
    }

    #[test]
    fn missing_key_names_the_variable() {
        let err = TargetImage::from_lookup(|name| {
            (name == TARGET_IMAGE_NAME).then(|| "probe-bucket".to_owned())
        })
        .unwrap_err();
        assert!(matches!(err, HandlerError::Config(TARGET_IMAGE_KEY)));
    }
}
