use serde::Deserialize;

use crate::{NavError, menu::MenuOptions};

use super::{NavId, NavTree, Page};

/// Top level navigation config, usually read from a toml file:
///
/// ```toml
/// [menu]
/// only_active = false
///
/// [[pages]]
/// label = "Home"
/// href = "/"
///
/// [[pages]]
/// label = "Blog"
/// href = "/blog"
///
/// [[pages.pages]]
/// label = "First post"
/// href = "/blog/first-post"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub menu: MenuOptions,
    #[serde(default)]
    pub pages: Vec<PageConfig>,
}

impl NavConfig {
    pub fn from_toml(raw: &str) -> Result<NavConfig, NavError> {
        toml::from_str(raw)
            .map_err(|error| NavError::from(error).with_context("parsing navigation config"))
    }
}

/// A page entry in the navigation config, nests through `pages`
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub label: String,
    pub id: Option<String>,
    pub title: Option<String>,
    pub href: Option<String>,
    pub target: Option<String>,
    pub access_key: Option<String>,
    pub class: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub pages: Vec<PageConfig>,
}

fn default_visible() -> bool {
    true
}

impl NavTree {
    /// Build a tree from nested config pages, keeping sibling order
    pub fn from_config(pages: Vec<PageConfig>) -> NavTree {
        let mut tree = NavTree::new();
        let root = tree.root();
        add_config_pages(&mut tree, root, pages);
        tree
    }
}

fn add_config_pages(tree: &mut NavTree, parent: NavId, pages: Vec<PageConfig>) {
    for config in pages {
        let children = config.pages;
        let page = Page {
            id: config.id,
            label: config.label,
            title: config.title,
            href: config.href,
            target: config.target,
            access_key: config.access_key,
            class: config.class,
            visible: config.visible,
            active: config.active,
        };
        let id = tree.add(page, parent);
        add_config_pages(tree, id, children);
    }
}
