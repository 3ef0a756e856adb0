//! Product image URL codec.
//!
//! Hosted product images follow a fixed layout:
//!
//! ```text
//! https://www.jiomart.com/images/product/{resolution}/{product_id}/
//!     {name}-{image_type}-{product_code}-p{p_number}-{index}-{timestamp}.jpg
//! ```
//!
//! where `resolution` is either `original` or a `WIDTHxHEIGHT` thumbnail tier.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use crate::domain::entities::{DecodedImageRef, ImageType, Resolution};
use crate::domain::errors::CodecError;

/// Host and path prefix shared by every product image.
pub const IMAGE_BASE_URL: &str = "https://www.jiomart.com/images/product";

static PRODUCT_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<base>https://www\.jiomart\.com/images/product)/(?P<resolution>original|\d+x\d+)/(?P<product_id>\d+)/(?P<name>[^/]+)-(?P<image_type>product-images|legal-images)-(?P<product_code>[^/-]+)-p(?P<p_number>\d+)-(?P<index>\d+)-(?P<timestamp>\d+)\.jpg$",
    )
    .expect("product image pattern is valid")
});

/// Decodes and re-encodes hosted product image URLs.
pub struct JiomartUrlCodec;

impl JiomartUrlCodec {
    /// Parses a URL into its components.
    ///
    /// Returns `None` when the URL does not follow the product image layout.
    /// That is not a failure: callers treat the URL as a single opaque image.
    #[must_use]
    pub fn decode(url: &str) -> Option<DecodedImageRef> {
        match Self::try_decode(url) {
            Ok(reference) => Some(reference),
            Err(e) => {
                trace!(url, error = %e, "URL not decodable");
                None
            }
        }
    }

    /// Parses a URL into its components, reporting why it did not match.
    ///
    /// # Errors
    /// Returns `CodecError` if the URL does not follow the layout.
    pub fn try_decode(url: &str) -> Result<DecodedImageRef, CodecError> {
        let caps = PRODUCT_IMAGE_RE
            .captures(url)
            .ok_or(CodecError::PatternMismatch)?;

        let resolution: Resolution = group(&caps, "resolution").parse()?;
        let image_type: ImageType = group(&caps, "image_type").parse()?;

        Ok(DecodedImageRef::new(
            group(&caps, "base"),
            resolution,
            group(&caps, "product_id"),
            group(&caps, "name"),
            image_type,
            group(&caps, "product_code"),
            group(&caps, "p_number"),
            group(&caps, "index"),
            group(&caps, "timestamp"),
        ))
    }

    /// Builds the original-tier URL for the given image type and index.
    ///
    /// Thumbnail tiers may be missing images, so the resolution found in the
    /// decoded URL is never reused.
    #[must_use]
    pub fn encode(reference: &DecodedImageRef, image_type: ImageType, index: u32) -> String {
        format!(
            "{}/{}/{}/{}-{}-{}-p{}-{}-{}.jpg",
            reference.base_url(),
            Resolution::ORIGINAL,
            reference.product_id(),
            reference.name(),
            image_type.as_str(),
            reference.product_code(),
            reference.p_number(),
            index,
            reference.timestamp(),
        )
    }

    /// Returns true if the URL follows the product image layout.
    #[must_use]
    pub fn is_product_image_url(url: &str) -> bool {
        PRODUCT_IMAGE_RE.is_match(url)
    }
}

fn group<'a>(caps: &Captures<'a>, name: &str) -> &'a str {
    caps.name(name).map_or("", |m| m.as_str())
}
