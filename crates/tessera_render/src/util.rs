//! Helpers for baked quad data.

use crate::colour::Colour;
use crate::error::FormatResult;
use crate::format::{ElementIndices, VertexFormat};
use crate::quad::{BakedQuad, Quad};
use crate::sprite::Sprite;
use crate::uv::{UvTransform, Vertex5};
use std::collections::HashMap;
use tessera_core::Orientation;

/// Groups quads by the face they belong to, keeping order within a face.
#[must_use]
pub fn sort_face_data(quads: Vec<BakedQuad>) -> HashMap<Orientation, Vec<BakedQuad>> {
    let mut faces: HashMap<Orientation, Vec<BakedQuad>> = HashMap::new();
    for quad in quads {
        faces.entry(quad.face).or_default().push(quad);
    }
    faces
}

/// Directional shading factor for a face.
#[must_use]
pub const fn diffuse_factor(face: Orientation) -> f32 {
    match face {
        Orientation::Down => 0.5,
        Orientation::North | Orientation::South => 0.8,
        Orientation::West | Orientation::East => 0.6,
        Orientation::Up => 1.0,
    }
}

/// Darkens the rgb channels of `colour` by the face's shading factor.
/// Alpha is left alone.
#[must_use]
pub fn diffuse_face_light(face: Orientation, colour: Colour) -> Colour {
    let d = diffuse_factor(face);
    Colour::new(colour.r * d, colour.g * d, colour.b * d, colour.a)
}

/// Builds a packed quad from four positioned, textured vertices.
///
/// Each uv goes through `transform`, every vertex gets the face normal and
/// the face-shaded colour. The result is untinted and samples `sprite`.
///
/// # Errors
///
/// Propagates packing failures.
#[allow(clippy::cast_possible_truncation)]
pub fn build_quad(
    format: &VertexFormat,
    sprite: &Sprite,
    face: Orientation,
    colour: Colour,
    transform: &dyn UvTransform,
    vertices: [Vertex5; 4],
) -> FormatResult<BakedQuad> {
    let mut quad = Quad::new(face);
    let shaded = diffuse_face_light(face, colour).to_array();
    for (out, mut input) in quad.vertices.iter_mut().zip(vertices) {
        transform.apply(&mut input.uv);
        out.pos = input.vec.to_f32_array();
        out.uv = [input.uv.u as f32, input.uv.v as f32];
        out.normal = face.normal();
        out.color = shaded;
    }
    quad.bake(format, &ElementIndices::resolve(format), Some(sprite.name.clone()))
}
