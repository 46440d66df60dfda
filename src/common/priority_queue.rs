use crate::core::Weight;

/// Vertex with its priority stored in a [`PriorityQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapNode {
    pub vertex: usize,
    pub priority: Weight,
}

/// Binary min-heap over vertices with a fixed capacity.
///
/// Lower priority is extracted first. Ties between equal priorities are
/// resolved by the heap structure.
#[derive(Debug, Clone)]
pub struct PriorityQueue {
    heap: Vec<HeapNode>,
    capacity: usize,
}

impl PriorityQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Inserts the vertex with given priority.
    ///
    /// When the queue is full, the vertex is not inserted and `false` is
    /// returned. Callers are expected to provision enough capacity up front.
    pub fn insert(&mut self, vertex: usize, priority: Weight) -> bool {
        if self.heap.len() == self.capacity {
            tracing::warn!(
                vertex,
                priority,
                capacity = self.capacity,
                "priority queue is full"
            );
            return false;
        }

        self.heap.push(HeapNode { vertex, priority });
        self.sift_up(self.heap.len() - 1);
        true
    }

    /// Removes and returns the vertex with the lowest priority, or `None` if
    /// the queue is empty.
    pub fn extract_min(&mut self) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }

        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some(min.vertex)
    }

    pub fn peek_min(&self) -> Option<&HeapNode> {
        self.heap.first()
    }

    /// Lowers the priority of the vertex.
    ///
    /// Nothing happens if the vertex is not in the queue or if the new
    /// priority is not strictly lower than the current one. Only the first
    /// occurrence of the vertex is considered.
    pub fn decrease_key(&mut self, vertex: usize, new_priority: Weight) {
        if let Some(index) = self.heap.iter().position(|node| node.vertex == vertex) {
            if new_priority < self.heap[index].priority {
                self.heap[index].priority = new_priority;
                self.sift_up(index);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[parent].priority <= self.heap[index].priority {
                break;
            }

            self.heap.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();

        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }

            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}
