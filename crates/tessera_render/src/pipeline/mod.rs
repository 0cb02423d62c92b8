//! Quad pipeline orchestration.
//!
//! A pipeline is a linear chain of stages run over one quad at a time.
//! Every stage mutates the same [`Quad`] in place and answers whether the
//! quad should continue. The first `false` drops the quad and the driver
//! moves on to the next input.
//!
//! ```text
//! BakedQuad ─load─▶ Quad ─▶ clamp ─▶ reinterpolate ─▶ ... ─store─▶ BakedQuad
//!                               └─ false: culled, nothing emitted
//! ```
//!
//! A pipeline owns its stages and its quad buffer, so separate pipelines
//! can run on separate threads. One pipeline is never shared.

mod stats;
pub mod transformers;

pub use stats::PipelineStats;

use crate::error::FormatResult;
use crate::format::{ElementIndices, VertexFormat};
use crate::quad::{BakedQuad, Quad};
use tessera_core::{Cuboid6, Orientation, Vector3};
use transformers::{QuadClamper, QuadOffsetter, QuadReInterpolator};

/// One stage of a quad pipeline.
pub trait QuadTransformer: Send {
    /// Short stage name for diagnostics.
    fn name(&self) -> &'static str;

    /// Sees each quad as it entered the pipeline, before any stage runs.
    fn prepare(&mut self, _input: &Quad) {}

    /// Processes `quad` in place.
    ///
    /// Returns `false` to drop the quad. Dropping is ordinary control flow.
    fn transform(&mut self, quad: &mut Quad) -> bool;
}

/// A stage held by a [`QuadPipeline`].
pub enum PipelineElement {
    /// Clamp positions into a box, cull collapsed quads.
    Clamp(QuadClamper),
    /// Re-interpolate attributes after positions moved.
    ReInterpolate(QuadReInterpolator),
    /// Translate positions.
    Offset(QuadOffsetter),
    /// Any other stage.
    Custom(Box<dyn QuadTransformer>),
}

impl QuadTransformer for PipelineElement {
    fn name(&self) -> &'static str {
        match self {
            Self::Clamp(stage) => stage.name(),
            Self::ReInterpolate(stage) => stage.name(),
            Self::Offset(stage) => stage.name(),
            Self::Custom(stage) => stage.name(),
        }
    }

    fn prepare(&mut self, input: &Quad) {
        match self {
            Self::Clamp(stage) => stage.prepare(input),
            Self::ReInterpolate(stage) => stage.prepare(input),
            Self::Offset(stage) => stage.prepare(input),
            Self::Custom(stage) => stage.prepare(input),
        }
    }

    fn transform(&mut self, quad: &mut Quad) -> bool {
        match self {
            Self::Clamp(stage) => stage.transform(quad),
            Self::ReInterpolate(stage) => stage.transform(quad),
            Self::Offset(stage) => stage.transform(quad),
            Self::Custom(stage) => stage.transform(quad),
        }
    }
}

fn run_stages(stages: &mut [PipelineElement], quad: &mut Quad, trace_culling: bool) -> bool {
    for stage in stages.iter_mut() {
        stage.prepare(quad);
    }
    for stage in stages.iter_mut() {
        if !stage.transform(quad) {
            if trace_culling {
                tracing::trace!(stage = stage.name(), face = ?quad.orientation, "quad culled");
            }
            return false;
        }
    }
    true
}

/// Runs quads of one vertex format through a chain of stages.
pub struct QuadPipeline {
    format: VertexFormat,
    indices: ElementIndices,
    stages: Vec<PipelineElement>,
    /// Working buffer, reloaded for every quad.
    quad: Quad,
    stats: PipelineStats,
    trace_culling: bool,
}

impl QuadPipeline {
    /// Starts building a pipeline for `format`.
    #[must_use]
    pub fn builder(format: VertexFormat) -> PipelineBuilder {
        PipelineBuilder::new(format)
    }

    /// Runs every stage over a caller-owned quad.
    ///
    /// Returns `false` if a stage dropped it. Statistics are not touched.
    pub fn transform(&mut self, quad: &mut Quad) -> bool {
        run_stages(&mut self.stages, quad, self.trace_culling)
    }

    /// Runs one packed quad through the pipeline.
    ///
    /// Returns `None` if the quad was culled. The output keeps the input's
    /// sprite, and any elements the pipeline does not model keep their bytes.
    /// Quads rejected with an error are not counted in [`PipelineStats`].
    ///
    /// # Errors
    ///
    /// Fails if the packed data does not fit the pipeline's format.
    pub fn run(&mut self, input: &BakedQuad) -> FormatResult<Option<BakedQuad>> {
        self.quad.load(input, &self.format, &self.indices)?;

        if !run_stages(&mut self.stages, &mut self.quad, self.trace_culling) {
            self.stats.quads_in += 1;
            self.stats.quads_culled += 1;
            return Ok(None);
        }

        let mut vertex_data = input.vertex_data.clone();
        self.quad.store_into(&mut vertex_data, &self.format, &self.indices)?;
        self.stats.quads_in += 1;
        self.stats.quads_emitted += 1;

        Ok(Some(BakedQuad {
            vertex_data,
            tint_index: self.quad.tint_index,
            face: self.quad.orientation,
            sprite: input.sprite.clone(),
            diffuse_lighting: self.quad.diffuse_lighting,
        }))
    }

    /// Runs every quad of `input`, appending survivors to `output`.
    ///
    /// Returns the number of quads appended.
    ///
    /// # Errors
    ///
    /// Stops at the first quad whose data does not fit the format.
    pub fn process<'a, I>(&mut self, input: I, output: &mut Vec<BakedQuad>) -> FormatResult<usize>
    where
        I: IntoIterator<Item = &'a BakedQuad>,
    {
        let before = output.len();
        for quad in input {
            if let Some(out) = self.run(quad)? {
                output.push(out);
            }
        }
        Ok(output.len() - before)
    }

    /// Replaces the bounds of every clamp stage.
    pub fn set_clamp_bounds(&mut self, bounds: impl Into<Cuboid6>) {
        let bounds = bounds.into();
        for stage in &mut self.stages {
            if let PipelineElement::Clamp(clamper) = stage {
                clamper.set_clamp_bounds(bounds);
            }
        }
    }

    /// The stages in run order.
    #[must_use]
    pub fn stages(&self) -> &[PipelineElement] {
        &self.stages
    }

    /// Mutable access to the stages, for reconfiguring between quads.
    pub fn stages_mut(&mut self) -> &mut [PipelineElement] {
        &mut self.stages
    }

    /// The vertex format this pipeline reads and writes.
    #[must_use]
    pub const fn format(&self) -> &VertexFormat {
        &self.format
    }

    /// Accumulated statistics.
    #[must_use]
    pub const fn stats(&self) -> PipelineStats {
        self.stats
    }

    /// Clears statistics.
    pub fn reset_stats(&mut self) {
        self.stats = PipelineStats::default();
    }
}

/// Assembles a [`QuadPipeline`].
pub struct PipelineBuilder {
    format: VertexFormat,
    indices: Option<ElementIndices>,
    stages: Vec<PipelineElement>,
    reinterpolate_clamped: bool,
    trace_culling: bool,
}

impl PipelineBuilder {
    /// Creates an empty builder for `format`.
    #[must_use]
    pub fn new(format: VertexFormat) -> Self {
        Self {
            format,
            indices: None,
            stages: Vec::new(),
            reinterpolate_clamped: false,
            trace_culling: false,
        }
    }

    /// Uses already resolved element indices instead of scanning the format.
    #[must_use]
    pub fn with_indices(mut self, indices: ElementIndices) -> Self {
        self.indices = Some(indices);
        self
    }

    /// Follows every clamp stage with a re-interpolator.
    ///
    /// Applies to all clamp stages at [`PipelineBuilder::build`], whether
    /// added before or after this call. Clamps already followed by a
    /// re-interpolator are left alone.
    #[must_use]
    pub fn reinterpolate_clamped(mut self, enabled: bool) -> Self {
        self.reinterpolate_clamped = enabled;
        self
    }

    /// Logs every culled quad at trace level.
    #[must_use]
    pub fn trace_culling(mut self, enabled: bool) -> Self {
        self.trace_culling = enabled;
        self
    }

    /// Appends a clamp stage.
    #[must_use]
    pub fn clamp(mut self, bounds: impl Into<Cuboid6>) -> Self {
        self.stages.push(PipelineElement::Clamp(QuadClamper::new(bounds)));
        self
    }

    /// Appends a re-interpolation stage.
    #[must_use]
    pub fn reinterpolate(mut self) -> Self {
        self.stages.push(PipelineElement::ReInterpolate(QuadReInterpolator::new()));
        self
    }

    /// Appends a translation stage.
    #[must_use]
    pub fn offset(mut self, offset: Vector3) -> Self {
        self.stages.push(PipelineElement::Offset(QuadOffsetter::new(offset)));
        self
    }

    /// Appends a custom stage.
    #[must_use]
    pub fn stage(mut self, stage: Box<dyn QuadTransformer>) -> Self {
        self.stages.push(PipelineElement::Custom(stage));
        self
    }

    /// Builds the pipeline.
    #[must_use]
    pub fn build(self) -> QuadPipeline {
        let indices = self.indices.unwrap_or_else(|| ElementIndices::resolve(&self.format));
        let stages = if self.reinterpolate_clamped {
            follow_clamps_with_reinterpolation(self.stages)
        } else {
            self.stages
        };
        tracing::debug!(
            stages = stages.len(),
            format_size = self.format.size(),
            "quad pipeline built"
        );
        QuadPipeline {
            format: self.format,
            indices,
            stages,
            quad: Quad::new(Orientation::Up),
            stats: PipelineStats::default(),
            trace_culling: self.trace_culling,
        }
    }
}

fn follow_clamps_with_reinterpolation(stages: Vec<PipelineElement>) -> Vec<PipelineElement> {
    let mut out = Vec::with_capacity(stages.len() * 2);
    let mut stages = stages.into_iter().peekable();
    while let Some(stage) = stages.next() {
        let is_clamp = matches!(stage, PipelineElement::Clamp(_));
        out.push(stage);
        if is_clamp && !matches!(stages.peek(), Some(PipelineElement::ReInterpolate(_))) {
            out.push(PipelineElement::ReInterpolate(QuadReInterpolator::new()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::packing::quad_integer_size;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct DropAll;

    impl QuadTransformer for DropAll {
        fn name(&self) -> &'static str {
            "drop_all"
        }

        fn transform(&mut self, _quad: &mut Quad) -> bool {
            false
        }
    }

    struct CountCalls(Arc<AtomicUsize>);

    impl QuadTransformer for CountCalls {
        fn name(&self) -> &'static str {
            "count"
        }

        fn transform(&mut self, _quad: &mut Quad) -> bool {
            self.0.fetch_add(1, Ordering::Relaxed);
            true
        }
    }

    #[test]
    fn test_pipeline_creation() {
        let pipeline = QuadPipeline::builder(VertexFormat::block()).build();
        assert!(pipeline.stages().is_empty());
        assert_eq!(pipeline.stats(), PipelineStats::default());
    }

    #[test]
    fn test_empty_pipeline_passes_data_through() {
        let format = VertexFormat::block();
        let mut data = vec![0u32; quad_integer_size(&format)];
        data[3] = 0xFF80_40FF;
        let input = BakedQuad::new(data, Orientation::South).with_sprite("dirt");

        let mut pipeline = QuadPipeline::builder(format).build();
        let out = pipeline.run(&input).unwrap().unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_first_false_stops_the_chain() {
        let downstream = Arc::new(AtomicUsize::new(0));
        let mut pipeline = QuadPipeline::builder(VertexFormat::block())
            .stage(Box::new(DropAll))
            .stage(Box::new(CountCalls(Arc::clone(&downstream))))
            .build();

        let mut quad = Quad::new(Orientation::Up);
        assert!(!pipeline.transform(&mut quad));
        assert_eq!(downstream.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_surviving_quad_reaches_every_stage() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut pipeline = QuadPipeline::builder(VertexFormat::block())
            .stage(Box::new(CountCalls(Arc::clone(&calls))))
            .stage(Box::new(CountCalls(Arc::clone(&calls))))
            .build();

        let mut quad = Quad::new(Orientation::Up);
        assert!(pipeline.transform(&mut quad));
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_reinterpolate_clamped_adds_stage() {
        let pipeline = QuadPipeline::builder(VertexFormat::block())
            .reinterpolate_clamped(true)
            .clamp(Cuboid6::FULL_BLOCK)
            .offset(Vector3::ONE)
            .build();
        let names: Vec<_> = pipeline.stages().iter().map(QuadTransformer::name).collect();
        assert_eq!(names, ["clamp", "reinterpolate", "offset"]);
    }

    #[test]
    fn test_reinterpolate_clamped_applies_to_earlier_clamps() {
        let pipeline = QuadPipeline::builder(VertexFormat::block())
            .clamp(Cuboid6::FULL_BLOCK)
            .reinterpolate()
            .clamp(Cuboid6::FULL_BLOCK)
            .reinterpolate_clamped(true)
            .build();
        let names: Vec<_> = pipeline.stages().iter().map(QuadTransformer::name).collect();
        assert_eq!(names, ["clamp", "reinterpolate", "clamp", "reinterpolate"]);
    }

    #[test]
    fn test_set_clamp_bounds_reaches_clamp_stages() {
        let mut pipeline = QuadPipeline::builder(VertexFormat::block())
            .clamp(Cuboid6::FULL_BLOCK)
            .build();
        let half = Cuboid6::new(Vector3::ZERO, Vector3::new(0.5, 0.5, 0.5));
        pipeline.set_clamp_bounds(half);

        match &pipeline.stages()[0] {
            PipelineElement::Clamp(clamper) => assert_eq!(*clamper.clamp_bounds(), half),
            _ => panic!("expected clamp stage"),
        }
    }

    #[test]
    fn test_culled_quad_counts_in_stats() {
        let format = VertexFormat::block();
        let input = BakedQuad::new(vec![0; quad_integer_size(&format)], Orientation::Up);
        let mut pipeline = QuadPipeline::builder(format).stage(Box::new(DropAll)).build();

        assert_eq!(pipeline.run(&input).unwrap(), None);
        assert_eq!(pipeline.stats().quads_culled, 1);
        assert_eq!(pipeline.stats().cull_rate(), 1.0);

        pipeline.reset_stats();
        assert_eq!(pipeline.stats().quads_in, 0);
    }

    #[test]
    fn test_rejected_quad_is_not_counted() {
        let format = VertexFormat::block();
        let short = BakedQuad::new(vec![0; 4], Orientation::Up);
        let good = BakedQuad::new(vec![0; quad_integer_size(&format)], Orientation::Up);
        let mut pipeline = QuadPipeline::builder(format).build();

        assert!(pipeline.run(&short).is_err());
        assert_eq!(pipeline.stats(), PipelineStats::default());

        pipeline.run(&good).unwrap();
        let stats = pipeline.stats();
        assert_eq!(stats.quads_in, stats.quads_emitted + stats.quads_culled);
        assert_eq!(stats.quads_in, 1);
    }
}
