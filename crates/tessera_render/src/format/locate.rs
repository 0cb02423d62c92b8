//! Attribute locator.
//!
//! Linear scans over a format's element list. `None` means the format has
//! no such element, which is an ordinary answer; callers check before use.
//! Scans are pure, so hot paths resolve once per format through
//! [`FormatCache`].

use super::element::{Usage, VertexFormat, VertexFormatElement};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Index of the first element matching `predicate`.
fn find(format: &VertexFormat, predicate: impl Fn(&VertexFormatElement) -> bool) -> Option<usize> {
    format.elements().iter().position(predicate)
}

/// Index of the position element.
#[must_use]
pub fn position_element(format: &VertexFormat) -> Option<usize> {
    find(format, VertexFormatElement::is_position_element)
}

/// Index of the normal element.
#[must_use]
pub fn normal_element(format: &VertexFormat) -> Option<usize> {
    find(format, |e| e.usage == Usage::Normal)
}

/// Index of the first texture coordinate channel (uv index 0).
#[must_use]
pub fn uv_element(format: &VertexFormat) -> Option<usize> {
    find(format, |e| e.usage == Usage::Uv && e.index == 0)
}

/// Index of the colour element.
#[must_use]
pub fn color_element(format: &VertexFormat) -> Option<usize> {
    find(format, |e| e.usage == Usage::Color)
}

/// Index of the lightmap channel (uv index 2).
#[must_use]
pub fn lightmap_element(format: &VertexFormat) -> Option<usize> {
    find(format, |e| e.usage == Usage::Uv && e.index == 2)
}

/// Index of the first element structurally equal to `element`.
#[must_use]
pub fn element_index(format: &VertexFormat, element: &VertexFormatElement) -> Option<usize> {
    find(format, |e| e == element)
}

/// Resolved semantic element indices for one format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementIndices {
    /// Position element.
    pub position: Option<usize>,
    /// Normal element.
    pub normal: Option<usize>,
    /// First uv channel.
    pub uv: Option<usize>,
    /// Colour element.
    pub color: Option<usize>,
    /// Lightmap channel.
    pub lightmap: Option<usize>,
}

impl ElementIndices {
    /// Resolves every semantic element of `format`.
    #[must_use]
    pub fn resolve(format: &VertexFormat) -> Self {
        Self {
            position: position_element(format),
            normal: normal_element(format),
            uv: uv_element(format),
            color: color_element(format),
            lightmap: lightmap_element(format),
        }
    }
}

/// Thread-safe memo of [`ElementIndices`] per format.
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct FormatCache {
    entries: Arc<RwLock<HashMap<VertexFormat, ElementIndices>>>,
}

impl FormatCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the indices for `format`, resolving them on first use.
    pub fn indices(&self, format: &VertexFormat) -> ElementIndices {
        if let Some(indices) = self.entries.read().get(format) {
            return *indices;
        }
        *self
            .entries
            .write()
            .entry(format.clone())
            .or_insert_with(|| ElementIndices::resolve(format))
    }

    /// Number of formats resolved so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing has been resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
