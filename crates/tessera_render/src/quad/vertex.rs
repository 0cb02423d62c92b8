//! The mutable quad that flows through a pipeline.

use super::baked::BakedQuad;
use crate::error::{FormatError, FormatResult};
use crate::format::codec::{pack_element, unpack_element};
use crate::format::packing::{quad_integer_size, VERTICES_PER_QUAD};
use crate::format::{ElementIndices, VertexFormat};
use bytemuck::{Pod, Zeroable};
use tessera_core::{clip, Axis, Cuboid6, Orientation, Vector3};

/// One fully unpacked vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Model-space position.
    pub pos: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
    /// Surface normal.
    pub normal: [f32; 3],
    /// RGBA colour, `[0, 1]` per channel.
    pub color: [f32; 4],
    /// Block and sky light coordinates.
    pub lightmap: [f32; 2],
}

impl Vertex {
    /// Position component along `axis`.
    #[inline]
    #[must_use]
    pub const fn coord(&self, axis: Axis) -> f32 {
        self.pos[axis.index()]
    }
}

/// Four vertices forming a face.
///
/// Vertex order is the winding and is never changed by pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// The vertices, in winding order.
    pub vertices: [Vertex; VERTICES_PER_QUAD],
    /// Face direction, picks the in-plane axes.
    pub orientation: Orientation,
    /// Tint index, `-1` for untinted.
    pub tint_index: i32,
    /// Whether the host should apply directional shading.
    pub diffuse_lighting: bool,
}

impl Quad {
    /// Creates an empty quad facing `orientation`.
    ///
    /// Every vertex starts with the face normal.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        let vertex = Vertex {
            normal: orientation.normal(),
            ..Vertex::default()
        };
        Self {
            vertices: [vertex; VERTICES_PER_QUAD],
            orientation,
            tint_index: -1,
            diffuse_lighting: true,
        }
    }

    /// Clamps every vertex position into `bounds`, axis by axis.
    #[allow(clippy::cast_possible_truncation)]
    pub fn clamp(&mut self, bounds: &Cuboid6) {
        for vertex in &mut self.vertices {
            for axis in Axis::ALL {
                let i = axis.index();
                vertex.pos[i] = clip(
                    f64::from(vertex.pos[i]),
                    bounds.min.component(axis),
                    bounds.max.component(axis),
                ) as f32;
            }
        }
    }

    /// Translates every vertex position.
    pub fn offset(&mut self, delta: Vector3) {
        let d = delta.to_f32_array();
        for vertex in &mut self.vertices {
            for (p, d) in vertex.pos.iter_mut().zip(d) {
                *p += d;
            }
        }
    }

    /// Position components of all four vertices along `axis`.
    #[must_use]
    pub fn coords(&self, axis: Axis) -> [f32; VERTICES_PER_QUAD] {
        self.vertices.map(|v| v.coord(axis))
    }

    /// Returns true if the quad has collapsed to a line or a point.
    ///
    /// That is the case when all four vertices share one coordinate on
    /// either in-plane axis. Exact float comparison is intended: callers
    /// run this on values that went through the same clamp.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.orientation.in_plane_axes().iter().any(|&axis| {
            let [a, b, c, d] = self.coords(axis);
            a == b && b == c && c == d
        })
    }

    /// Loads `baked` into this quad, replacing all state.
    ///
    /// Attributes the format lacks load as defaults: zero uv and lightmap,
    /// white colour, and the face normal.
    ///
    /// # Errors
    ///
    /// [`FormatError::BufferTooSmall`] if the packed data is short.
    pub fn load(
        &mut self,
        baked: &BakedQuad,
        format: &VertexFormat,
        indices: &ElementIndices,
    ) -> FormatResult<()> {
        let required = quad_integer_size(format);
        if baked.vertex_data.len() < required {
            return Err(FormatError::BufferTooSmall {
                required,
                actual: baked.vertex_data.len(),
            });
        }

        self.orientation = baked.face;
        self.tint_index = baked.tint_index;
        self.diffuse_lighting = baked.diffuse_lighting;

        let data = &baked.vertex_data;
        let face_normal = baked.face.normal();
        let mut tmp = [0.0f32; 4];
        for (v, vertex) in self.vertices.iter_mut().enumerate() {
            *vertex = Vertex {
                normal: face_normal,
                color: [1.0; 4],
                ..Vertex::default()
            };
            if let Some(e) = indices.position {
                unpack_element(data, &mut tmp, format, v, e)?;
                vertex.pos.copy_from_slice(&tmp[..3]);
            }
            if let Some(e) = indices.uv {
                unpack_element(data, &mut tmp, format, v, e)?;
                vertex.uv.copy_from_slice(&tmp[..2]);
            }
            if let Some(e) = indices.normal {
                unpack_element(data, &mut tmp, format, v, e)?;
                vertex.normal.copy_from_slice(&tmp[..3]);
            }
            if let Some(e) = indices.color {
                unpack_element(data, &mut vertex.color, format, v, e)?;
            }
            if let Some(e) = indices.lightmap {
                unpack_element(data, &mut tmp, format, v, e)?;
                vertex.lightmap.copy_from_slice(&tmp[..2]);
            }
        }
        Ok(())
    }

    /// Packs this quad's attributes into `packed`.
    ///
    /// Elements the indices do not name are left untouched, so storing
    /// over the buffer a quad was loaded from keeps padding and generic
    /// elements intact.
    ///
    /// # Errors
    ///
    /// [`FormatError::BufferTooSmall`] if `packed` is short.
    pub fn store_into(
        &self,
        packed: &mut [u32],
        format: &VertexFormat,
        indices: &ElementIndices,
    ) -> FormatResult<()> {
        let required = quad_integer_size(format);
        if packed.len() < required {
            return Err(FormatError::BufferTooSmall {
                required,
                actual: packed.len(),
            });
        }

        for (v, vertex) in self.vertices.iter().enumerate() {
            if let Some(e) = indices.position {
                let [x, y, z] = vertex.pos;
                pack_element(&[x, y, z, 1.0], packed, format, v, e)?;
            }
            if let Some(e) = indices.uv {
                let [u, w] = vertex.uv;
                pack_element(&[u, w, 0.0, 0.0], packed, format, v, e)?;
            }
            if let Some(e) = indices.normal {
                let [x, y, z] = vertex.normal;
                pack_element(&[x, y, z, 0.0], packed, format, v, e)?;
            }
            if let Some(e) = indices.color {
                pack_element(&vertex.color, packed, format, v, e)?;
            }
            if let Some(e) = indices.lightmap {
                let [block, sky] = vertex.lightmap;
                pack_element(&[block, sky, 0.0, 0.0], packed, format, v, e)?;
            }
        }
        Ok(())
    }

    /// Packs this quad into a new [`BakedQuad`].
    ///
    /// # Errors
    ///
    /// Propagates [`Quad::store_into`] failures.
    pub fn bake(
        &self,
        format: &VertexFormat,
        indices: &ElementIndices,
        sprite: Option<String>,
    ) -> FormatResult<BakedQuad> {
        let mut vertex_data = vec![0u32; quad_integer_size(format)];
        self.store_into(&mut vertex_data, format, indices)?;
        Ok(BakedQuad {
            vertex_data,
            tint_index: self.tint_index,
            face: self.orientation,
            sprite,
            diffuse_lighting: self.diffuse_lighting,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn up_quad(min: f32, max: f32, y: f32) -> Quad {
        let mut quad = Quad::new(Orientation::Up);
        let corners = [[min, min], [min, max], [max, max], [max, min]];
        for (vertex, [x, z]) in quad.vertices.iter_mut().zip(corners) {
            vertex.pos = [x, y, z];
            vertex.uv = [x, z];
        }
        quad
    }

    #[test]
    fn test_clamp_moves_outside_coordinates() {
        let mut quad = up_quad(-1.0, 2.0, 3.0);
        quad.clamp(&Cuboid6::FULL_BLOCK);
        assert_eq!(quad.coords(Axis::X), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(quad.coords(Axis::Y), [1.0; 4]);
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(!up_quad(0.0, 1.0, 0.5).is_degenerate());

        let mut line = up_quad(0.0, 1.0, 0.5);
        for vertex in &mut line.vertices {
            vertex.pos[2] = 0.25;
        }
        assert!(line.is_degenerate());
    }

    #[test]
    fn test_offset() {
        let mut quad = up_quad(0.0, 1.0, 0.0);
        quad.offset(Vector3::new(1.0, 2.0, 0.0));
        assert_eq!(quad.vertices[0].pos, [1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_bake_then_load() {
        let format = VertexFormat::block();
        let indices = ElementIndices::resolve(&format);
        let mut quad = up_quad(0.0, 1.0, 0.5);
        quad.tint_index = 2;

        let baked = quad.bake(&format, &indices, Some("stone".into())).unwrap();
        assert_eq!(baked.face, Orientation::Up);
        assert_eq!(baked.tint_index, 2);

        let mut loaded = Quad::new(Orientation::Down);
        loaded.load(&baked, &format, &indices).unwrap();
        assert_eq!(loaded.orientation, Orientation::Up);
        assert_eq!(loaded.vertices[2].pos, [1.0, 0.5, 1.0]);
        assert_eq!(loaded.vertices[2].uv, [1.0, 1.0]);
        assert_eq!(loaded.vertices[2].normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_new_quad_carries_face_normal() {
        let quad = Quad::new(Orientation::North);
        for vertex in quad.vertices {
            assert_eq!(vertex.normal, [0.0, 0.0, -1.0]);
        }

        let format = VertexFormat::block();
        let indices = ElementIndices::resolve(&format);
        let baked = Quad::new(Orientation::East)
            .bake(&format, &indices, None)
            .unwrap();
        let mut loaded = Quad::new(Orientation::Up);
        loaded.load(&baked, &format, &indices).unwrap();
        assert_eq!(loaded.vertices[0].normal, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_load_defaults_missing_attributes() {
        let format = VertexFormat::position_color();
        let indices = ElementIndices::resolve(&format);
        let baked = BakedQuad::new(vec![0; 16], Orientation::West);

        let mut quad = Quad::new(Orientation::Up);
        quad.load(&baked, &format, &indices).unwrap();
        assert_eq!(quad.vertices[0].normal, [-1.0, 0.0, 0.0]);
        assert_eq!(quad.vertices[0].uv, [0.0, 0.0]);
    }

    #[test]
    fn test_load_rejects_short_data() {
        let format = VertexFormat::block();
        let indices = ElementIndices::resolve(&format);
        let baked = BakedQuad::new(vec![0; 4], Orientation::Up);
        let mut quad = Quad::new(Orientation::Up);
        assert!(quad.load(&baked, &format, &indices).is_err());
    }
}
