use serde::Deserialize;

/// Rendering options for [MenuRenderer](super::MenuRenderer), all optional in
/// config
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuOptions {
    /// css class for the top level `<ul>`
    pub ul_class: String,
    /// string used for indentation, falls back to a single tab when empty
    pub indent: String,
    /// how deep in the tree to start rendering
    pub min_depth: usize,
    /// deepest level to render, pages below are ignored even if active
    pub max_depth: Option<usize>,
    /// only render the active page, its ancestors and policy-defined siblings
    pub only_active: bool,
    /// render top level parents as real hyperlinks instead of dropdown
    /// toggles
    pub parents_are_links: bool,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            ul_class: "nav".into(),
            indent: "\t".into(),
            min_depth: 0,
            max_depth: None,
            only_active: false,
            parents_are_links: false,
        }
    }
}
