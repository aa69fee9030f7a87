pub mod components;
pub mod pages;
pub mod sites;

#[cfg(test)]
mod tests;

pub use components::ComponentStore;
pub use pages::PageStore;
pub use sites::SiteStore;

use std::time::Duration;
use tokio::time::sleep;

/// Scale factor for the artificial I/O latency applied to every store call.
///
/// The backing data is an in-process collection, so the delay only exists to
/// make the stores behave like a remote service. Tests run with `off()`.
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    factor: f32,
}

impl Latency {
    /// Full latency, matching the reference delay table
    pub fn realistic() -> Self {
        Self { factor: 1.0 }
    }

    /// No delay at all
    pub fn off() -> Self {
        Self { factor: 0.0 }
    }

    /// Custom scale factor over the base delay table
    pub fn scaled(factor: f32) -> Self {
        Self { factor }
    }

    pub(crate) async fn simulate(&self, base_ms: u64) {
        let ms = (base_ms as f32 * self.factor) as u64;
        if ms > 0 {
            sleep(Duration::from_millis(ms)).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::realistic()
    }
}

/// Fresh id for a store: one past the largest existing id, or 1 when empty
pub(crate) fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}

/// Next ordering value among siblings: one past the largest, or 1 when empty
pub(crate) fn next_ordinal(values: impl Iterator<Item = u32>) -> u32 {
    values.max().map_or(1, |max| max + 1)
}
