/// Counters kept by a [`BlockPool`](crate::memory::BlockPool) over its lifetime.
#[derive(Debug, Clone)]
pub struct PoolStats {
    /// Blocks handed out, whether from the free list or the heap.
    pub acquisitions: u64,
    /// Blocks given back.
    pub releases: u64,
    /// Acquisitions served by a plain heap allocation because the pool was empty and not allowed
    /// to grow.
    pub heap_fallbacks: u64,
    /// Number of times the pool allocated another batch of blocks.
    pub growths: u64,
    /// Largest number of blocks outstanding at once.
    pub peak_outstanding: u64,
}

impl PoolStats {
    pub fn new() -> Self {
        Self {
            acquisitions: 0,
            releases: 0,
            heap_fallbacks: 0,
            growths: 0,
            peak_outstanding: 0,
        }
    }

    pub fn record_acquisition(&mut self, from_heap: bool) {
        self.acquisitions += 1;
        if from_heap {
            self.heap_fallbacks += 1;
        }
        self.peak_outstanding = self.peak_outstanding.max(self.outstanding());
    }
    pub fn record_release(&mut self) {
        self.releases += 1;
    }
    pub fn record_growth(&mut self) {
        self.growths += 1;
    }

    /// Blocks acquired and not yet released.
    pub fn outstanding(&self) -> u64 {
        self.acquisitions.saturating_sub(self.releases)
    }

    /// Fraction of acquisitions served without falling back to the heap, in `[0, 1]`.
    pub fn hit_rate(&self) -> f64 {
        if self.acquisitions == 0 {
            1.0
        } else {
            (self.acquisitions - self.heap_fallbacks) as f64 / self.acquisitions as f64
        }
    }

    pub fn format_summary(&self) -> String {
        format!(
            "{} acquired, {} released, {} heap fallbacks, {} growths, peak {} outstanding",
            self.acquisitions, self.releases, self.heap_fallbacks, self.growths, self.peak_outstanding
        )
    }
}

impl Default for PoolStats {
    fn default() -> Self {
        Self::new()
    }
}
