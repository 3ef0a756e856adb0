//! Structured form of a hosted product image URL.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::errors::CodecError;

/// Category of an image within a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageType {
    /// Photos of the product itself.
    ProductImages,
    /// Label, ingredient and regulatory shots.
    LegalImages,
}

impl ImageType {
    /// Every known image type, in probing order.
    pub const ALL: [Self; 2] = [Self::ProductImages, Self::LegalImages];

    /// Returns the token used in hosted filenames.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProductImages => "product-images",
            Self::LegalImages => "legal-images",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageType {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product-images" => Ok(Self::ProductImages),
            "legal-images" => Ok(Self::LegalImages),
            other => Err(CodecError::unknown_image_type(other)),
        }
    }
}

/// Resolution tier segment of a hosted image path.
///
/// Thumbnail tiers keep the segment exactly as it appeared, leading zeros
/// and all; nothing downstream needs the numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Full-size tier holding the complete image set.
    Original,
    /// Fixed-pixel thumbnail tier such as `420x420`.
    Pixels(String),
}

impl Resolution {
    /// Literal path segment of the original tier.
    pub const ORIGINAL: &'static str = "original";

    /// Returns true for the original tier.
    #[must_use]
    pub const fn is_original(&self) -> bool {
        matches!(self, Self::Original)
    }

    /// Returns the path segment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Original => Self::ORIGINAL,
            Self::Pixels(segment) => segment,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Resolution {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ORIGINAL {
            return Ok(Self::Original);
        }

        let is_dimension = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        match s.split_once('x') {
            Some((width, height)) if is_dimension(width) && is_dimension(height) => {
                Ok(Self::Pixels(s.to_string()))
            }
            _ => Err(CodecError::invalid_resolution(s)),
        }
    }
}

/// Components of a decoded product image URL.
///
/// Produced by the URL codec and never mutated afterwards. Candidates are
/// derived from it by substituting only the image type and index, so the
/// `timestamp` the host checks is carried over unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedImageRef {
    base_url: String,
    resolution: Resolution,
    product_id: String,
    name: String,
    image_type: ImageType,
    product_code: String,
    p_number: String,
    index: String,
    timestamp: String,
}

impl DecodedImageRef {
    /// Creates a reference from already-validated components.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        base_url: impl Into<String>,
        resolution: Resolution,
        product_id: impl Into<String>,
        name: impl Into<String>,
        image_type: ImageType,
        product_code: impl Into<String>,
        p_number: impl Into<String>,
        index: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            resolution,
            product_id: product_id.into(),
            name: name.into(),
            image_type,
            product_code: product_code.into(),
            p_number: p_number.into(),
            index: index.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Returns the host and path prefix.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the resolution tier found in the source URL.
    #[must_use]
    pub const fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Returns the numeric product identifier segment.
    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Returns the product slug.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the image type found in the source URL.
    #[must_use]
    pub const fn image_type(&self) -> ImageType {
        self.image_type
    }

    /// Returns the opaque product code segment.
    #[must_use]
    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    /// Returns the p-number segment verbatim.
    #[must_use]
    pub fn p_number(&self) -> &str {
        &self.p_number
    }

    /// Returns the image index segment verbatim.
    #[must_use]
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Returns the image index as a number, if it fits in a `u64`.
    #[must_use]
    pub fn index_number(&self) -> Option<u64> {
        self.index.parse().ok()
    }

    /// Returns the versioning token.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns a copy with the p-number shifted by one.
    ///
    /// Returns `None` when the p-number does not fit in a `u64`. Leading
    /// zeros are kept so the segment width stays the same.
    #[must_use]
    pub fn with_next_p_number(&self) -> Option<Self> {
        let next = self.p_number.parse::<u64>().ok()?.checked_add(1)?;
        let width = self.p_number.len();

        Some(Self {
            p_number: format!("{next:0width$}"),
            ..self.clone()
        })
    }
}
