pub mod priority_queue;
pub mod queue;
pub mod stack;
pub mod union_find;
pub mod visit_set;

pub use priority_queue::{HeapNode, PriorityQueue};
pub use queue::Queue;
pub use stack::Stack;
pub use union_find::UnionFind;
pub use visit_set::VisitSet;
