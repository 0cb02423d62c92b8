//! Per-element pack/unpack primitive.
//!
//! Packed data is addressed in bytes, little-endian inside each `u32` word:
//! byte `p` lives in word `p / 4` at bit `(p % 4) * 8`. A component may
//! straddle two words.
//!
//! Both functions check that `data` covers vertex `v` before touching it.

use super::element::{ElementType, Usage, VertexFormat, VertexFormatElement};
use super::packing::VERTICES_PER_QUAD;
use crate::error::{FormatError, FormatResult};

/// Reads `size` bytes starting at byte `pos`.
#[inline]
fn read_bits(data: &[u32], pos: usize, size: usize) -> u32 {
    let mut bits = 0u32;
    for b in 0..size {
        let p = pos + b;
        let byte = (data[p >> 2] >> ((p & 3) * 8)) & 0xFF;
        bits |= byte << (b * 8);
    }
    bits
}

/// Writes the low `size` bytes of `bits` starting at byte `pos`.
#[inline]
fn write_bits(data: &mut [u32], pos: usize, size: usize, bits: u32) {
    for b in 0..size {
        let p = pos + b;
        let shift = (p & 3) * 8;
        let byte = (bits >> (b * 8)) & 0xFF;
        let word = &mut data[p >> 2];
        *word = (*word & !(0xFF << shift)) | (byte << shift);
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]
fn decode(ty: ElementType, bits: u32) -> f32 {
    match ty {
        ElementType::Float => f32::from_bits(bits),
        ElementType::UByte => bits as f32 / 255.0,
        ElementType::UShort => bits as f32 / 65535.0,
        ElementType::UInt => (f64::from(bits) / f64::from(u32::MAX)) as f32,
        ElementType::Byte => f32::from(bits as u8 as i8) / 127.0,
        ElementType::Short => f32::from(bits as u16 as i16) / 32767.0,
        ElementType::Int => (f64::from(bits as i32) / f64::from(i32::MAX)) as f32,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn encode(ty: ElementType, value: f32) -> u32 {
    match ty {
        ElementType::Float => value.to_bits(),
        unsigned if unsigned.is_unsigned() => {
            let mask = f64::from(unsigned.mask());
            (f64::from(value) * mask).round().clamp(0.0, mask) as u32
        }
        signed => {
            let half = f64::from(signed.mask() >> 1);
            let scaled = (f64::from(value) * half).round().clamp(-half - 1.0, half);
            (scaled as i64 as u32) & signed.mask()
        }
    }
}

/// Decodes element `e` of vertex `v` into `to`.
///
/// Components past the element's count read as `0.0`, except the fourth
/// component of a position, which reads as `1.0`.
///
/// # Errors
///
/// [`FormatError::ElementOutOfRange`] if `e` is not an element of `format`,
/// [`FormatError::VertexOutOfRange`] if `v` is not a quad vertex,
/// [`FormatError::BufferTooSmall`] if `from` ends before vertex `v` does.
pub fn unpack_element(
    from: &[u32],
    to: &mut [f32; 4],
    format: &VertexFormat,
    v: usize,
    e: usize,
) -> FormatResult<()> {
    let (element, offset) = element_at(format, e, v, from.len())?;
    let start = v * format.size() + offset;
    let size = element.ty.size();
    let count = usize::from(element.count);

    for (i, slot) in to.iter_mut().enumerate() {
        *slot = if i < count {
            decode(element.ty, read_bits(from, start + size * i, size))
        } else if i == 3 && element.usage == Usage::Position {
            1.0
        } else {
            0.0
        };
    }
    Ok(())
}

/// Encodes `from` into element `e` of vertex `v`.
///
/// Only the element's own bytes are touched. Unsigned types saturate.
///
/// # Errors
///
/// Same as [`unpack_element`].
pub fn pack_element(
    from: &[f32; 4],
    to: &mut [u32],
    format: &VertexFormat,
    v: usize,
    e: usize,
) -> FormatResult<()> {
    let (element, offset) = element_at(format, e, v, to.len())?;
    let start = v * format.size() + offset;
    let size = element.ty.size();

    for (i, value) in from.iter().take(usize::from(element.count)).enumerate() {
        write_bits(to, start + size * i, size, encode(element.ty, *value));
    }
    Ok(())
}

fn element_at(
    format: &VertexFormat,
    e: usize,
    v: usize,
    words: usize,
) -> FormatResult<(&VertexFormatElement, usize)> {
    let (Some(element), Some(offset)) = (format.element(e), format.offset(e)) else {
        return Err(FormatError::ElementOutOfRange {
            element: e,
            count: format.element_count(),
        });
    };
    if v >= VERTICES_PER_QUAD {
        return Err(FormatError::VertexOutOfRange {
            vertex: v,
            count: VERTICES_PER_QUAD,
        });
    }
    let required = ((v + 1) * format.size()).div_ceil(4);
    if words < required {
        return Err(FormatError::BufferTooSmall {
            required,
            actual: words,
        });
    }
    Ok((element, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_position_roundtrip_is_exact() {
        let format = VertexFormat::block();
        let mut data = vec![0u32; format.integer_size() * 4];
        pack_element(&[0.25, -3.5, 16.0, 0.0], &mut data, &format, 2, 0).unwrap();

        let mut out = [0.0; 4];
        unpack_element(&data, &mut out, &format, 2, 0).unwrap();
        assert_eq!(out, [0.25, -3.5, 16.0, 1.0]);
    }

    #[test]
    fn test_ubyte_colour_packs_little_endian() {
        let format = VertexFormat::block();
        let mut data = vec![0u32; format.integer_size() * 4];
        pack_element(&[1.0, 0.0, 1.0, 0.0], &mut data, &format, 0, 1).unwrap();
        // Colour sits in word 3 of vertex 0, red in the low byte.
        assert_eq!(data[3], 0x00FF_00FF);
    }

    #[test]
    fn test_unsigned_saturates() {
        let format = VertexFormat::block();
        let mut data = vec![0u32; format.integer_size() * 4];
        pack_element(&[2.0, -1.0, 0.5, 1.0], &mut data, &format, 0, 1).unwrap();

        let mut out = [0.0; 4];
        unpack_element(&data, &mut out, &format, 0, 1).unwrap();
        assert_eq!(out[0], 1.0);
        assert_eq!(out[1], 0.0);
        assert!((out[2] - 0.5).abs() < 1.0 / 255.0);
    }

    #[test]
    fn test_signed_normal_keeps_sign() {
        let format = VertexFormat::block();
        let mut data = vec![0u32; format.integer_size() * 4];
        pack_element(&[0.0, -1.0, 1.0, 0.0], &mut data, &format, 1, 4).unwrap();

        let mut out = [9.0; 4];
        unpack_element(&data, &mut out, &format, 1, 4).unwrap();
        assert_eq!(out, [0.0, -1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_pack_leaves_neighbouring_bytes_alone() {
        let format = VertexFormat::block();
        let mut data = vec![u32::MAX; format.integer_size() * 4];
        // Normal is 3 bytes followed by padding in the same word.
        pack_element(&[0.0, 0.0, 0.0, 0.0], &mut data, &format, 0, 4).unwrap();
        assert_eq!(data[7], 0xFF00_0000);
    }

    #[test]
    fn test_component_straddling_words() {
        let format = VertexFormat::new(vec![
            VertexFormatElement::new(0, ElementType::UByte, Usage::Generic, 1),
            VertexFormatElement::new(0, ElementType::Float, Usage::Generic, 1),
        ]);
        let mut data = vec![0u32; 8];
        pack_element(&[1234.5, 0.0, 0.0, 0.0], &mut data, &format, 0, 1).unwrap();

        let mut out = [0.0; 4];
        unpack_element(&data, &mut out, &format, 0, 1).unwrap();
        assert_eq!(out[0], 1234.5);
    }

    #[test]
    fn test_element_out_of_range() {
        let format = VertexFormat::position_color();
        let mut out = [0.0; 4];
        let err = unpack_element(&[0; 16], &mut out, &format, 0, 5).unwrap_err();
        assert_eq!(err, FormatError::ElementOutOfRange { element: 5, count: 2 });
    }

    #[test]
    fn test_short_buffer_is_an_error() {
        let format = VertexFormat::block();
        let mut out = [0.0; 4];
        let err = unpack_element(&[0u32; 2], &mut out, &format, 0, 0).unwrap_err();
        assert_eq!(err, FormatError::BufferTooSmall { required: 8, actual: 2 });

        // Two vertices fit, the third does not.
        let mut data = vec![0u32; 16];
        pack_element(&[1.0; 4], &mut data, &format, 1, 0).unwrap();
        let err = pack_element(&[1.0; 4], &mut data, &format, 2, 0).unwrap_err();
        assert_eq!(err, FormatError::BufferTooSmall { required: 24, actual: 16 });
    }

    #[test]
    fn test_vertex_past_quad_is_an_error() {
        let format = VertexFormat::block();
        let mut data = vec![0u32; format.integer_size() * 8];
        let err = pack_element(&[1.0; 4], &mut data, &format, 4, 0).unwrap_err();
        assert_eq!(err, FormatError::VertexOutOfRange { vertex: 4, count: 4 });
    }
}
