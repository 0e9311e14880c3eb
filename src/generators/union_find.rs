/// Disjoint-set forest over flattened cell indices, with path compression and
/// union by rank.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
            components: size,
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Compress the path so every visited node points at the root
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets holding `x` and `y`.
    /// Returns `false` if they were already in the same set.
    pub fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.components -= 1;
        true
    }

    /// Number of disjoint sets left.
    pub fn components(&self) -> usize {
        self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unite_and_find() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.components(), 5);
        assert!(uf.unite(0, 1));
        assert!(uf.unite(3, 4));
        assert!(!uf.unite(1, 0));
        assert_eq!(uf.find(0), uf.find(1));
        assert_ne!(uf.find(0), uf.find(3));
        assert!(uf.unite(1, 4));
        assert_eq!(uf.find(0), uf.find(3));
        assert_eq!(uf.components(), 2);
    }

    #[test]
    fn test_long_chain_compresses() {
        let mut uf = UnionFind::new(10_000);
        (1..10_000).for_each(|i| {
            uf.unite(i - 1, i);
        });
        assert_eq!(uf.components(), 1);
        let root = uf.find(9_999);
        assert!((0..10_000).all(|i| uf.find(i) == root));
    }
}
