//! Errors raised while building cells from raw mesh data.

use thiserror::Error;

use crate::CellKind;

/// Reasons a [`Cell`](crate::Cell) cannot be built from a point list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    #[error("{kind:?} cell needs exactly {expected} vertices, got {found}")]
    VertexCount {
        kind: CellKind,
        expected: usize,
        found: usize,
    },
    #[error("{kind:?} cell needs at least {minimum} vertices, got {found}")]
    TooFewVertices {
        kind: CellKind,
        minimum: usize,
        found: usize,
    },
}
