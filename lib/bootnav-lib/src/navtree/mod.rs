mod nav_config;
mod nav_tree;
mod page;

pub use nav_config::{NavConfig, PageConfig};
pub use nav_tree::{NavId, NavNode, NavTree};
pub use page::Page;
