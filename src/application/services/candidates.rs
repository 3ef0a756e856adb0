//! Candidate URL generation.

use std::ops::RangeInclusive;

use crate::domain::entities::{DecodedImageRef, ImageType, ProbePhase};

use super::url_codec::JiomartUrlCodec;

/// Indices where listings place their primary images.
pub const PRIORITY_INDICES: RangeInclusive<u32> = 0..=5;

/// Indices checked once the priority phase has settled.
pub const SECONDARY_INDICES: RangeInclusive<u32> = 6..=15;

/// Ordered group of candidate URLs probed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateBatch {
    /// Phase this batch belongs to.
    pub phase: ProbePhase,
    /// Candidate URLs, grouped by image type then ascending index.
    pub urls: Vec<String>,
}

impl CandidateBatch {
    /// Builds a batch covering every index in `indices` for each image type.
    #[must_use]
    pub fn generate(
        phase: ProbePhase,
        reference: &DecodedImageRef,
        image_types: &[ImageType],
        indices: RangeInclusive<u32>,
    ) -> Self {
        let urls = image_types
            .iter()
            .flat_map(|&image_type| {
                indices
                    .clone()
                    .map(move |index| JiomartUrlCodec::encode(reference, image_type, index))
            })
            .collect();

        Self { phase, urls }
    }

    /// Returns the number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns true if the batch holds no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "https://www.jiomart.com/images/product/420x420/590196200/onion-product-images-59a1-p1-0-1699999999.jpg";

    #[test]
    fn test_priority_batch_size() {
        let reference = JiomartUrlCodec::decode(SEED).unwrap();
        let batch = CandidateBatch::generate(
            ProbePhase::Priority,
            &reference,
            &ImageType::ALL,
            PRIORITY_INDICES,
        );

        assert_eq!(batch.len(), 12);
        assert_eq!(
            batch.urls[0],
            "https://www.jiomart.com/images/product/original/590196200/onion-product-images-59a1-p1-0-1699999999.jpg"
        );
        assert_eq!(
            batch.urls[11],
            "https://www.jiomart.com/images/product/original/590196200/onion-legal-images-59a1-p1-5-1699999999.jpg"
        );
    }

    #[test]
    fn test_secondary_batch_size() {
        let reference = JiomartUrlCodec::decode(SEED).unwrap();
        let batch = CandidateBatch::generate(
            ProbePhase::Secondary,
            &reference,
            &ImageType::ALL,
            SECONDARY_INDICES,
        );

        assert_eq!(batch.len(), 20);
        assert!(batch.urls.iter().all(|url| url.ends_with("-1699999999.jpg")));
        assert!(batch.urls.iter().all(|url| url.contains("/original/")));
    }

    #[test]
    fn test_empty_range_yields_empty_batch() {
        let reference = JiomartUrlCodec::decode(SEED).unwrap();
        #[allow(clippy::reversed_empty_ranges)]
        let batch =
            CandidateBatch::generate(ProbePhase::Priority, &reference, &ImageType::ALL, 3..=2);

        assert!(batch.is_empty());
    }
}
