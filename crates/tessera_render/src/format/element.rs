//! Vertex format descriptors.

/// What a vertex element means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Usage {
    /// Model-space position.
    Position,
    /// Surface normal.
    Normal,
    /// Vertex colour.
    Color,
    /// Texture coordinates. Index 0 is the block texture, index 2 the lightmap.
    Uv,
    /// Alignment padding, never read.
    Padding,
    /// Anything else.
    Generic,
}

/// Storage type of each component of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// 32-bit IEEE float.
    Float,
    /// Unsigned byte, normalised to `[0, 1]`.
    UByte,
    /// Signed byte, normalised to `[-1, 1]`.
    Byte,
    /// Unsigned short, normalised to `[0, 1]`.
    UShort,
    /// Signed short, normalised to `[-1, 1]`.
    Short,
    /// Unsigned int, normalised to `[0, 1]`.
    UInt,
    /// Signed int, normalised to `[-1, 1]`.
    Int,
}

impl ElementType {
    /// Size of one component in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::UByte | Self::Byte => 1,
            Self::UShort | Self::Short => 2,
            Self::Float | Self::UInt | Self::Int => 4,
        }
    }

    /// Bit mask covering one component.
    #[must_use]
    pub const fn mask(self) -> u32 {
        match self.size() {
            1 => 0xFF,
            2 => 0xFFFF,
            _ => u32::MAX,
        }
    }

    /// Returns true for the unsigned integer types.
    #[must_use]
    pub const fn is_unsigned(self) -> bool {
        matches!(self, Self::UByte | Self::UShort | Self::UInt)
    }
}

/// One attribute of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexFormatElement {
    /// Sub-index among elements of the same usage (uv channel).
    pub index: u8,
    /// Component storage type.
    pub ty: ElementType,
    /// Semantic role.
    pub usage: Usage,
    /// Number of components, 1 to 4.
    pub count: u8,
}

impl VertexFormatElement {
    /// Three float position components.
    pub const POSITION_3F: Self = Self::new(0, ElementType::Float, Usage::Position, 3);
    /// RGBA colour as unsigned bytes.
    pub const COLOR_4UB: Self = Self::new(0, ElementType::UByte, Usage::Color, 4);
    /// Block texture coordinates.
    pub const TEX_2F: Self = Self::new(0, ElementType::Float, Usage::Uv, 2);
    /// Lightmap coordinates.
    pub const TEX_2S: Self = Self::new(2, ElementType::Short, Usage::Uv, 2);
    /// Normal as signed bytes.
    pub const NORMAL_3B: Self = Self::new(0, ElementType::Byte, Usage::Normal, 3);
    /// One byte of padding.
    pub const PADDING_1B: Self = Self::new(0, ElementType::Byte, Usage::Padding, 1);

    /// Creates a new element descriptor.
    #[must_use]
    pub const fn new(index: u8, ty: ElementType, usage: Usage, count: u8) -> Self {
        Self { index, ty, usage, count }
    }

    /// Returns true if this element holds the vertex position.
    #[must_use]
    pub const fn is_position_element(&self) -> bool {
        matches!(self.usage, Usage::Position)
    }

    /// Size of the whole element in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.ty.size() * self.count as usize
    }
}

/// Ordered list of elements describing one vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexFormat {
    elements: Vec<VertexFormatElement>,
    offsets: Vec<usize>,
    size: usize,
}

impl VertexFormat {
    /// Creates a format, laying elements out back to back.
    #[must_use]
    pub fn new(elements: Vec<VertexFormatElement>) -> Self {
        let mut offsets = Vec::with_capacity(elements.len());
        let mut size = 0;
        for element in &elements {
            offsets.push(size);
            size += element.size();
        }
        Self { elements, offsets, size }
    }

    /// The terrain format: position, colour, uv, lightmap, normal, padding.
    #[must_use]
    pub fn block() -> Self {
        Self::new(vec![
            VertexFormatElement::POSITION_3F,
            VertexFormatElement::COLOR_4UB,
            VertexFormatElement::TEX_2F,
            VertexFormatElement::TEX_2S,
            VertexFormatElement::NORMAL_3B,
            VertexFormatElement::PADDING_1B,
        ])
    }

    /// Position, uv, colour and normal, no lightmap.
    #[must_use]
    pub fn position_tex_color_normal() -> Self {
        Self::new(vec![
            VertexFormatElement::POSITION_3F,
            VertexFormatElement::TEX_2F,
            VertexFormatElement::COLOR_4UB,
            VertexFormatElement::NORMAL_3B,
            VertexFormatElement::PADDING_1B,
        ])
    }

    /// Position and colour only.
    #[must_use]
    pub fn position_color() -> Self {
        Self::new(vec![
            VertexFormatElement::POSITION_3F,
            VertexFormatElement::COLOR_4UB,
        ])
    }

    /// The elements in layout order.
    #[must_use]
    pub fn elements(&self) -> &[VertexFormatElement] {
        &self.elements
    }

    /// Element at index `e`.
    #[must_use]
    pub fn element(&self, e: usize) -> Option<&VertexFormatElement> {
        self.elements.get(e)
    }

    /// Byte offset of element `e` inside a vertex.
    #[must_use]
    pub fn offset(&self, e: usize) -> Option<usize> {
        self.offsets.get(e).copied()
    }

    /// Number of elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Size of one vertex in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Size of one vertex in `u32` words, rounded up.
    #[must_use]
    pub const fn integer_size(&self) -> usize {
        self.size.div_ceil(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_format_layout() {
        let format = VertexFormat::block();
        assert_eq!(format.size(), 32);
        assert_eq!(format.integer_size(), 8);
        assert_eq!(format.offset(0), Some(0));
        assert_eq!(format.offset(1), Some(12));
        assert_eq!(format.offset(2), Some(16));
        assert_eq!(format.offset(3), Some(24));
        assert_eq!(format.offset(4), Some(28));
        assert_eq!(format.offset(6), None);
    }

    #[test]
    fn test_element_masks() {
        assert_eq!(ElementType::UByte.mask(), 0xFF);
        assert_eq!(ElementType::Short.mask(), 0xFFFF);
        assert_eq!(ElementType::Float.mask(), u32::MAX);
        assert!(ElementType::UShort.is_unsigned());
        assert!(!ElementType::Byte.is_unsigned());
    }

    #[test]
    fn test_position_color_rounds_up_to_words() {
        let format = VertexFormat::position_color();
        assert_eq!(format.size(), 16);
        assert_eq!(format.integer_size(), 4);
    }
}
