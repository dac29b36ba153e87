//! Peak-size estimation for search data structures.
//!
//! The estimate is a coarse proxy: every element held by a frontier, visited
//! set or recursion path counts as a fixed [`BYTES_PER_ELEMENT`]. It tracks
//! growth trends across algorithms, not true heap usage.

/// Assumed footprint of one tracked element.
pub const BYTES_PER_ELEMENT: u64 = 32;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Running maximum of tracked element counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeakMeter {
    peak_elements: u64,
}

impl PeakMeter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current total element count. Never lowers the peak.
    pub fn record(&mut self, elements: usize) {
        self.peak_elements = self
            .peak_elements
            .max(u64::try_from(elements).unwrap_or(u64::MAX));
    }

    /// Largest element count recorded so far.
    #[must_use]
    pub fn peak_elements(&self) -> u64 {
        self.peak_elements
    }

    /// Peak estimate in bytes.
    #[must_use]
    pub fn peak_bytes(&self) -> u64 {
        self.peak_elements.saturating_mul(BYTES_PER_ELEMENT)
    }

    /// Peak estimate in MB (`bytes / 1024²`).
    #[must_use]
    pub fn peak_mb(&self) -> f64 {
        bytes_to_mb(self.peak_bytes())
    }
}

/// Convert a byte count to MB.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}
