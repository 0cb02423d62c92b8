//! # Render Error Types
//!
//! Errors raised on the packed vertex data path.
//!
//! Culling a quad, failing to find an element while locating, and falling
//! back to the missing sprite are ordinary outcomes and never show up here.

use crate::format::Usage;
use thiserror::Error;

/// Errors that can occur while packing or unpacking vertex data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The requested element is not part of the format.
    #[error("vertex format has no {usage:?} element with index {index}")]
    MissingElement {
        /// Usage of the element that was asked for.
        usage: Usage,
        /// Sub-index of the element that was asked for.
        index: u8,
    },

    /// Element index past the end of the format's element list.
    #[error("element index {element} out of range, format has {count} elements")]
    ElementOutOfRange {
        /// The index that was used.
        element: usize,
        /// Number of elements in the format.
        count: usize,
    },

    /// Packed buffer cannot hold the vertices being accessed.
    #[error("packed buffer too small: need {required} ints, have {actual}")]
    BufferTooSmall {
        /// Ints needed.
        required: usize,
        /// Ints provided.
        actual: usize,
    },

    /// Vertex index past the last vertex of a quad.
    #[error("vertex index {vertex} out of range, a quad has {count} vertices")]
    VertexOutOfRange {
        /// The index that was used.
        vertex: usize,
        /// Vertices per quad.
        count: usize,
    },

    /// Unpacked data does not have one entry per format element.
    #[error("unpacked vertex {vertex} has {actual} elements, format has {expected}")]
    ElementCountMismatch {
        /// Vertex whose element list is wrong.
        vertex: usize,
        /// Element count of the format.
        expected: usize,
        /// Element count found.
        actual: usize,
    },
}

/// Result type for vertex data operations.
pub type FormatResult<T> = Result<T, FormatError>;
