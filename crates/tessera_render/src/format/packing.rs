//! Whole-quad pack/unpack.
//!
//! Iteration is element-major: for each element, vertices 0 through 3.
//! Every per-element conversion goes through [`codec`](super::codec).

use super::codec::{pack_element, unpack_element};
use super::element::{VertexFormat, VertexFormatElement};
use super::locate::element_index;
use crate::error::{FormatError, FormatResult};

/// Vertices in a quad.
pub const VERTICES_PER_QUAD: usize = 4;

/// Fully unpacked quad: `[vertex][element][component]`.
pub type UnpackedQuad = [Vec<[f32; 4]>; VERTICES_PER_QUAD];

/// Number of `u32` words holding a whole quad of `format`.
#[must_use]
pub fn quad_integer_size(format: &VertexFormat) -> usize {
    (VERTICES_PER_QUAD * format.size()).div_ceil(4)
}

fn check_buffer(len: usize, format: &VertexFormat) -> FormatResult<()> {
    let required = quad_integer_size(format);
    if len < required {
        return Err(FormatError::BufferTooSmall { required, actual: len });
    }
    Ok(())
}

fn check_unpacked(unpacked: &UnpackedQuad, format: &VertexFormat) -> FormatResult<()> {
    let expected = format.element_count();
    for (vertex, elements) in unpacked.iter().enumerate() {
        if elements.len() != expected {
            return Err(FormatError::ElementCountMismatch {
                vertex,
                expected,
                actual: elements.len(),
            });
        }
    }
    Ok(())
}

/// Unpacks every element of every vertex.
///
/// # Errors
///
/// [`FormatError::BufferTooSmall`] if `packed` does not hold a whole quad.
pub fn unpack_all(packed: &[u32], format: &VertexFormat) -> FormatResult<UnpackedQuad> {
    let n = format.element_count();
    let mut unpacked: UnpackedQuad = std::array::from_fn(|_| vec![[0.0; 4]; n]);
    unpack_all_into(packed, &mut unpacked, format)?;
    Ok(unpacked)
}

/// Unpacks every element of every vertex into an existing structure.
///
/// # Errors
///
/// [`FormatError::BufferTooSmall`] or [`FormatError::ElementCountMismatch`]
/// when the inputs do not match `format`.
pub fn unpack_all_into(
    packed: &[u32],
    unpacked: &mut UnpackedQuad,
    format: &VertexFormat,
) -> FormatResult<()> {
    check_buffer(packed.len(), format)?;
    check_unpacked(unpacked, format)?;
    for e in 0..format.element_count() {
        for (v, vertex) in unpacked.iter_mut().enumerate() {
            unpack_element(packed, &mut vertex[e], format, v, e)?;
        }
    }
    Ok(())
}

/// Packs every element of every vertex into a new buffer.
///
/// # Errors
///
/// [`FormatError::ElementCountMismatch`] if `unpacked` does not match `format`.
pub fn pack_all(unpacked: &UnpackedQuad, format: &VertexFormat) -> FormatResult<Vec<u32>> {
    let mut packed = vec![0u32; quad_integer_size(format)];
    pack_all_into(unpacked, &mut packed, format)?;
    Ok(packed)
}

/// Packs every element of every vertex into `packed`.
///
/// # Errors
///
/// [`FormatError::BufferTooSmall`] or [`FormatError::ElementCountMismatch`]
/// when the inputs do not match `format`.
pub fn pack_all_into(
    unpacked: &UnpackedQuad,
    packed: &mut [u32],
    format: &VertexFormat,
) -> FormatResult<()> {
    check_buffer(packed.len(), format)?;
    check_unpacked(unpacked, format)?;
    for e in 0..format.element_count() {
        for (v, vertex) in unpacked.iter().enumerate() {
            pack_element(&vertex[e], packed, format, v, e)?;
        }
    }
    Ok(())
}

/// Unpacks a single element for all four vertices.
///
/// # Errors
///
/// [`FormatError::MissingElement`] if `element` is not part of `format`,
/// [`FormatError::BufferTooSmall`] if `packed` does not hold a whole quad.
pub fn unpack_one(
    packed: &[u32],
    format: &VertexFormat,
    element: &VertexFormatElement,
) -> FormatResult<[[f32; 4]; VERTICES_PER_QUAD]> {
    let e = element_index(format, element).ok_or(FormatError::MissingElement {
        usage: element.usage,
        index: element.index,
    })?;
    check_buffer(packed.len(), format)?;

    let mut data = [[0.0; 4]; VERTICES_PER_QUAD];
    for (v, out) in data.iter_mut().enumerate() {
        unpack_element(packed, out, format, v, e)?;
    }
    Ok(data)
}
