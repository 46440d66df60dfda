//! [Arbitrary](https://docs.rs/arbitrary) support for fuzzing the graph
//! mutation API.

use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{
        error::{RemoveEdgeError, VertexOutOfRange},
        Weight,
    },
    graph::Graph,
};

const MAX_VERTEX_COUNT: usize = 64;

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

/// Graph mutation with endpoints given as arbitrary indices, mapped into the
/// vertex range on application.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq)]
pub enum MutOp {
    AddEdge(Index, Index, Weight),
    AddDirectedEdge(Index, Index, Weight),
    RemoveEdge(Index, Index),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutOpResult {
    AddEdge(Result<(), VertexOutOfRange>),
    AddDirectedEdge(Result<(), VertexOutOfRange>),
    RemoveEdge(Result<Weight, RemoveEdgeError>),
}

impl MutOp {
    pub fn apply(self, graph: &mut Graph) -> MutOpResult {
        let n = graph.vertex_count();

        match self {
            MutOp::AddEdge(src, dst, weight) => MutOpResult::AddEdge(graph.add_edge(
                src.get(n).unwrap_or_default(),
                dst.get(n).unwrap_or_default(),
                weight,
            )),
            MutOp::AddDirectedEdge(src, dst, weight) => {
                MutOpResult::AddDirectedEdge(graph.add_directed_edge(
                    src.get(n).unwrap_or_default(),
                    dst.get(n).unwrap_or_default(),
                    weight,
                ))
            }
            MutOp::RemoveEdge(src, dst) => MutOpResult::RemoveEdge(graph.remove_edge(
                src.get(n).unwrap_or_default(),
                dst.get(n).unwrap_or_default(),
            )),
        }
    }
}

/// Vertex count together with a sequence of mutations to apply on a graph of
/// that size.
pub struct MutOpsSeq {
    pub vertex_count: usize,
    pub ops: Vec<MutOp>,
}

impl MutOpsSeq {
    /// Applies all operations on a fresh graph, calling `inspect` after each
    /// of them.
    pub fn replay<F>(self, mut inspect: F) -> Graph
    where
        F: FnMut(&Graph, MutOpResult),
    {
        let mut graph = Graph::new(self.vertex_count);

        for op in self.ops {
            let result = op.apply(&mut graph);
            inspect(&graph, result);
        }

        graph
    }
}

impl<'a> Arbitrary<'a> for MutOpsSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let vertex_count = u.int_in_range(0..=MAX_VERTEX_COUNT)?;
        let mut ops = Vec::new();

        while !u.is_empty() {
            match MutOp::arbitrary(u) {
                Ok(op) => ops.push(op),
                Err(_) => break,
            }
        }

        Ok(MutOpsSeq { vertex_count, ops })
    }
}

impl fmt::Debug for MutOpsSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "let mut graph = Graph::new({});", self.vertex_count)?;

        for op in self.ops.iter() {
            match op {
                MutOp::AddEdge(src, dst, weight) => {
                    writeln!(f, "graph.add_edge({}, {}, {weight});", src.0, dst.0)?
                }
                MutOp::AddDirectedEdge(src, dst, weight) => writeln!(
                    f,
                    "graph.add_directed_edge({}, {}, {weight});",
                    src.0, dst.0
                )?,
                MutOp::RemoveEdge(src, dst) => {
                    writeln!(f, "graph.remove_edge({}, {});", src.0, dst.0)?
                }
            }
        }

        writeln!(f, "// indices are taken modulo the vertex count")
    }
}
