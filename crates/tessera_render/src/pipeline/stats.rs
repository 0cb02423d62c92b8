//! Pipeline statistics.

/// Counters accumulated by a [`QuadPipeline`](super::QuadPipeline).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Quads that went through the pipeline without an error.
    pub quads_in: u64,
    /// Quads that survived every stage.
    pub quads_emitted: u64,
    /// Quads dropped by a stage.
    pub quads_culled: u64,
}

impl PipelineStats {
    /// Fraction of input quads that were culled.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn cull_rate(&self) -> f32 {
        if self.quads_in > 0 {
            self.quads_culled as f32 / self.quads_in as f32
        } else {
            0.0
        }
    }
}
