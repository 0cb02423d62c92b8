//! Attribute re-interpolation stage.
//!
//! After a stage moves positions (a clamp, typically), uv, colour and
//! lightmap still hold the values of the original corners. This stage
//! recomputes them from the quad as it entered the pipeline, using
//! bilinear weights over the two in-plane axes.
//!
//! For corner `j` of the input quad and a moved vertex `p`, the weight is
//! the product over both in-plane axes of `max(0, 1 - |p - c_j| / extent)`.
//! On an axis-aligned rectangle this is exact bilinear interpolation. An
//! axis with zero extent contributes a factor of one.

use crate::pipeline::QuadTransformer;
use crate::quad::{Quad, Vertex};
use tessera_core::Orientation;

/// Re-interpolates uv, colour and lightmap against the input quad.
#[derive(Debug, Clone, Copy)]
pub struct QuadReInterpolator {
    input: Quad,
}

impl QuadReInterpolator {
    /// Creates a re-interpolator. It needs [`QuadTransformer::prepare`]
    /// before each quad, which [`QuadPipeline`](crate::pipeline::QuadPipeline) does.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: Quad::new(Orientation::Up),
        }
    }

    fn weights(&self, vertex: &Vertex) -> [f32; 4] {
        let mut weights = [1.0f32; 4];
        for axis in self.input.orientation.in_plane_axes() {
            let coords = self.input.coords(axis);
            let min = coords.iter().copied().fold(f32::INFINITY, f32::min);
            let max = coords.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            let extent = max - min;
            if extent <= 0.0 {
                continue;
            }
            let p = vertex.coord(axis);
            for (w, c) in weights.iter_mut().zip(coords) {
                *w *= (1.0 - (p - c).abs() / extent).max(0.0);
            }
        }
        weights
    }
}

impl Default for QuadReInterpolator {
    fn default() -> Self {
        Self::new()
    }
}

fn blend<const N: usize>(
    weights: &[f32; 4],
    total: f32,
    pick: impl Fn(&Vertex) -> [f32; N],
    corners: &[Vertex; 4],
) -> [f32; N] {
    let mut out = [0.0f32; N];
    for (w, corner) in weights.iter().zip(corners) {
        for (o, value) in out.iter_mut().zip(pick(corner)) {
            *o += w * value;
        }
    }
    out.map(|v| v / total)
}

impl QuadTransformer for QuadReInterpolator {
    fn name(&self) -> &'static str {
        "reinterpolate"
    }

    fn prepare(&mut self, input: &Quad) {
        self.input = *input;
    }

    fn transform(&mut self, quad: &mut Quad) -> bool {
        let corners = &self.input.vertices;
        for i in 0..quad.vertices.len() {
            let weights = self.weights(&quad.vertices[i]);
            let total: f32 = weights.iter().sum();
            if total <= 0.0 {
                continue;
            }
            let vertex = &mut quad.vertices[i];
            vertex.uv = blend(&weights, total, |v| v.uv, corners);
            vertex.color = blend(&weights, total, |v| v.color, corners);
            vertex.lightmap = blend(&weights, total, |v| v.lightmap, corners);
        }
        true
    }
}
