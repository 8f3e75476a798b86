/// Implement this trait to get generic functionality over tree structures
pub trait Node {
    fn children(&self) -> &Vec<usize>;
}

/// Implement this trait to get generic functionality over tree structures
pub trait Tree {
    type Node: Node;
    fn root(&self) -> usize;
    fn get(&self, id: usize) -> Option<&Self::Node>;
}

/// Pre-order depth-first iterator over a [Tree], yielding `(id, depth)` with
/// `depth` relative to the node the walk started from. Siblings come out in
/// document order.
pub struct DFS<'n, T: Tree> {
    stack: Vec<(usize, usize)>,
    tree: &'n T,
}

impl<'n, T: Tree> DFS<'n, T> {
    pub fn new(tree: &'n T) -> Self {
        Self::from(tree, tree.root())
    }

    /// Start the walk at an arbitrary node instead of the root
    pub fn from(tree: &'n T, id: usize) -> Self {
        DFS {
            stack: vec![(id, 0)],
            tree,
        }
    }
}

impl<'n, T: Tree> Iterator for DFS<'n, T> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((id, depth)) = self.stack.pop() {
            if let Some(node) = self.tree.get(id) {
                for child in node.children().iter().rev() {
                    self.stack.push((*child, depth + 1))
                }
            }
            return Some((id, depth));
        }
        None
    }
}
