use crate::core::error::IndexOutOfBounds;

/// Disjoint-set forest with union by rank and path compression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every element on the way to the representative is re-parented directly
    /// to it.
    pub fn find(&mut self, element: usize) -> Result<usize, IndexOutOfBounds> {
        self.check_index(element)?;

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = element;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` if they were already in the same set.
    pub fn unite(&mut self, x: usize, y: usize) -> Result<bool, IndexOutOfBounds> {
        let x_root = self.find(x)?;
        let y_root = self.find(y)?;

        if x_root == y_root {
            return Ok(false);
        }

        match self.rank[x_root].cmp(&self.rank[y_root]) {
            std::cmp::Ordering::Less => self.parent[x_root] = y_root,
            std::cmp::Ordering::Greater => self.parent[y_root] = x_root,
            std::cmp::Ordering::Equal => {
                self.parent[y_root] = x_root;
                self.rank[x_root] = self.rank[x_root].saturating_add(1);
            }
        }

        tracing::trace!(x, y, "united sets");
        Ok(true)
    }

    pub fn same_set(&mut self, x: usize, y: usize) -> Result<bool, IndexOutOfBounds> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Makes every element a singleton set again.
    pub fn reset(&mut self) {
        for (i, parent) in self.parent.iter_mut().enumerate() {
            *parent = i;
        }
        self.rank.fill(0);
    }

    fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len() {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }
}
