use std::io::{self, Write};

use crate::graph::Graph;

pub trait Export {
    fn export<W: Write>(&self, graph: &Graph, out: &mut W) -> io::Result<()>;

    fn to_string(&self, graph: &Graph) -> String {
        let mut buf = Vec::new();
        self.export(graph, &mut buf)
            .expect("writing to vec does not fail");

        String::from_utf8(buf).expect("export format is text format")
    }
}

/// Plain text listing of the adjacency entries, one line per vertex:
///
/// ```text
/// Graph adjacency list:
/// 0 ---> (1, weight = 2)
/// 1 ---> (2, weight = 3) (0, weight = 2)
/// 2 ---> (1, weight = 3)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacencyList;

impl Export for AdjacencyList {
    fn export<W: Write>(&self, graph: &Graph, out: &mut W) -> io::Result<()> {
        out.write_all(b"Graph adjacency list: \n")?;

        for (vertex, list) in graph.adjacency().iter().enumerate() {
            write!(out, "{vertex} ---> ")?;

            for neighbor in list {
                write!(out, "({}, weight = {}) ", neighbor.vertex, neighbor.weight)?;
            }

            out.write_all(b"\n")?;
        }

        Ok(())
    }
}

/// [DOT](https://graphviz.org/doc/info/lang.html) export.
///
/// Every adjacency entry becomes a directed edge labeled with its weight, so
/// an undirected edge shows up as a pair of opposite edges.
#[derive(Debug, Clone)]
pub struct Dot {
    name: String,
}

impl Dot {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
        }
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Export for Dot {
    fn export<W: Write>(&self, graph: &Graph, out: &mut W) -> io::Result<()> {
        out.write_all(b"digraph ")?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for vertex in 0..graph.vertex_count() {
            writeln!(out, "    v{vertex};")?;
        }

        for edge in graph.edges() {
            writeln!(
                out,
                "    v{} -> v{} [label={}];",
                edge.src, edge.dst, edge.weight
            )?;
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}
