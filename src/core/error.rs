use std::fmt;

use thiserror::Error;

/// A vertex index outside of `[0, vertex_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
pub struct VertexOutOfRange {
    pub vertex: usize,
    pub vertex_count: usize,
}

impl VertexOutOfRange {
    pub fn new(vertex: usize, vertex_count: usize) -> Self {
        Self {
            vertex,
            vertex_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("edge from {src} to {dst} does not exist")]
pub struct EdgeNotFound {
    pub src: usize,
    pub dst: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoveEdgeError {
    #[error("{0}")]
    OutOfRange(#[from] VertexOutOfRange),
    #[error("{0}")]
    NotFound(#[from] EdgeNotFound),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("container with capacity {capacity} failed: {kind}")]
pub struct CapacityError {
    pub kind: CapacityErrorKind,
    pub capacity: usize,
}

impl CapacityError {
    pub fn overflow(capacity: usize) -> Self {
        Self {
            kind: CapacityErrorKind::Overflow,
            capacity,
        }
    }

    pub fn underflow(capacity: usize) -> Self {
        Self {
            kind: CapacityErrorKind::Underflow,
            capacity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapacityErrorKind {
    Overflow,
    Underflow,
}

impl fmt::Display for CapacityErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            CapacityErrorKind::Overflow => "the container is full",
            CapacityErrorKind::Underflow => "the container is empty",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("index {index} is out of bounds for {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}
