//! Render a hierarchical navigation tree into nested `<ul>`/`<li>` markup
//! following the Bootstrap dropdown-menu conventions.
//!
//! # Example
//! ```rs
//! let mut tree = NavTree::new();
//! let root = tree.root();
//! let blog = tree.add(Page::with_href("Blog", "/blog"), root);
//! let post = tree.add(Page::with_href("First post", "/blog/first-post"), blog);
//! tree.activate(post);
//!
//! let renderer = MenuRenderer::new(MenuOptions::default());
//! let html = renderer.render(&tree).unwrap();
//! ```
pub mod menu;
pub mod nav_error;
pub mod navtree;

mod tree;

pub use nav_error::NavError;
