use core::fmt;
use std::ops::{Index, IndexMut};

use crate::{
    NavError,
    tree::{DFS, Node, Tree},
};

use super::page::Page;

pub type NavId = usize;

#[derive(Debug)]
pub struct NavNode {
    pub page: Page,
    pub parent: Option<NavId>,
    pub children: Vec<NavId>,
}

impl Node for NavNode {
    fn children(&self) -> &Vec<usize> {
        &self.children
    }
}

/// Code representation of the whole navigation hierarchy. Nodes live in an
/// append-only arena with the parent fixed at insert, so the tree can not
/// contain cycles.
#[derive(Debug)]
pub struct NavTree {
    nodes: Vec<NavNode>,
    root: NavId,
}

impl NavTree {
    /// Create an empty tree with only the (hidden) root container
    pub fn new() -> NavTree {
        NavTree {
            nodes: vec![NavNode {
                page: Page::new("root"),
                parent: None,
                children: vec![],
            }],
            root: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> NavId {
        self.root
    }

    pub fn get(&self, id: NavId) -> Result<&NavNode, NavError> {
        self.nodes
            .get(id)
            .ok_or(NavError::tree(format!("Could not find {id} in NavTree")))
    }

    /// Utility function to add a page, create an id and add to parent children
    pub fn add(&mut self, page: Page, parent: NavId) -> NavId {
        let id = self.nodes.len();
        self.nodes[parent].children.push(id);
        self.nodes.push(NavNode {
            page,
            parent: Some(parent),
            children: vec![],
        });
        id
    }

    pub fn parent(&self, id: NavId) -> Option<NavId> {
        self.nodes[id].parent
    }

    /// Check if `child` is a direct child of `id`
    pub fn has_page(&self, id: NavId, child: NavId) -> bool {
        self.nodes[id].children.contains(&child)
    }

    pub fn has_pages(&self, id: NavId) -> bool {
        !self.nodes[id].children.is_empty()
    }

    /// Whether this page or any of its descendants is the active page
    pub fn is_active(&self, id: NavId) -> bool {
        DFS::from(self, id).any(|(i, _)| self.nodes[i].page.active)
    }

    /// Search the direct children of `id` for the first active branch.
    /// Useful for constructing a menu of siblings, e.g. a primary nav of the
    /// top level items without any dropdowns.
    pub fn first_active_child(&self, id: NavId) -> Option<NavId> {
        self.nodes[id]
            .children
            .iter()
            .copied()
            .find(|c| self.is_active(*c))
    }

    /// Find the first page (in pre-order) with the given href
    pub fn find_by_href(&self, href: &str) -> Option<NavId> {
        DFS::new(self).find_map(|(id, _)| {
            if self.nodes[id].page.href.as_deref() == Some(href) {
                Some(id)
            } else {
                None
            }
        })
    }

    /// Mark a page as the active one
    pub fn activate(&mut self, id: NavId) {
        self.nodes[id].page.active = true;
    }
}

impl Default for NavTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree for NavTree {
    type Node = NavNode;

    fn root(&self) -> NavId {
        self.root
    }

    fn get(&self, id: NavId) -> Option<&Self::Node> {
        self.nodes.get(id)
    }
}

impl fmt::Display for NavTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = vec![];
        for (id, depth) in DFS::new(self) {
            let node = &self.nodes[id];
            let active = if node.page.active { " (active)" } else { "" };
            out.push(format!(
                "{}{}({id}){active}",
                "  ".repeat(depth),
                node.page.label
            ));
        }
        f.write_str(&out.join("\n"))?;
        Ok(())
    }
}

impl Index<NavId> for NavTree {
    type Output = NavNode;

    fn index(&self, index: NavId) -> &Self::Output {
        &self.nodes[index]
    }
}
impl IndexMut<NavId> for NavTree {
    fn index_mut(&mut self, index: NavId) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}
