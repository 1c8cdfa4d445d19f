//! # Piece Set
//!
//! WASM-friendly wrapper for split results that can be handed to the
//! canvas renderer without a JSON round trip.

use polyslice::Point;
use wasm_bindgen::prelude::*;

/// Flat buffers holding every piece produced by one cut.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const set = split_polygon_flat(coords, sx, sy, ex, ey);
/// if (set) {
///   const coords = set.coords();    // Float64Array
///   const offsets = set.offsets();  // Uint32Array
///   for (let i = 0; i < set.piece_count; i++) {
///     const ring = coords.subarray(offsets[i], offsets[i + 1]);
///     drawPolygon(ring);
///   }
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct PieceSet {
    /// Vertex coordinates as [x, y, x, y, ...], pieces back to back
    coords: Vec<f64>,
    /// Start of each piece in `coords`, plus one trailing end offset
    offsets: Vec<u32>,
}

#[wasm_bindgen]
impl PieceSet {
    /// Returns the number of pieces.
    #[wasm_bindgen(getter)]
    pub fn piece_count(&self) -> u32 {
        u32::try_from(self.offsets.len().saturating_sub(1)).unwrap_or(u32::MAX)
    }

    /// Returns all coordinates as a Float64Array.
    ///
    /// Format: [x, y, x, y, ...]
    #[wasm_bindgen]
    pub fn coords(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&self.coords[..])
    }

    /// Returns piece boundaries into `coords()` as a Uint32Array.
    ///
    /// Length: piece_count + 1
    #[wasm_bindgen]
    pub fn offsets(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.offsets[..])
    }

    /// Returns one piece's coordinates, or `undefined` past the end.
    #[wasm_bindgen]
    pub fn piece(&self, index: usize) -> Option<Vec<f64>> {
        let start = *self.offsets.get(index)? as usize;
        let end = *self.offsets.get(index + 1)? as usize;
        self.coords.get(start..end).map(<[f64]>::to_vec)
    }

    /// Returns true if there are no pieces.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.piece_count() == 0
    }
}

impl PieceSet {
    /// Packs split pieces into flat buffers.
    pub fn from_pieces(pieces: &[Vec<Point>]) -> Self {
        let total: usize = pieces.iter().map(Vec::len).sum();
        let mut coords = Vec::with_capacity(total * 2);
        let mut offsets = Vec::with_capacity(pieces.len() + 1);

        offsets.push(0);
        for piece in pieces {
            for p in piece {
                coords.push(p.x);
                coords.push(p.y);
            }
            offsets.push(u32::try_from(coords.len()).unwrap_or(u32::MAX));
        }

        Self { coords, offsets }
    }
}
