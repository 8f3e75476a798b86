/// Structural class of an accepted menu item. Dropdown parents need a
/// different class at different depths so the css framework can open nested
/// submenus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemClass {
    None,
    /// page with children at the top level
    Dropdown,
    /// page with children inside a dropdown
    DropdownSubmenu,
}

impl ItemClass {
    pub fn assign(has_children: bool, rel_depth: usize) -> ItemClass {
        match (has_children, rel_depth) {
            (false, _) => ItemClass::None,
            (true, 0) => ItemClass::Dropdown,
            (true, _) => ItemClass::DropdownSubmenu,
        }
    }

    pub fn is_parent(&self) -> bool {
        !matches!(self, ItemClass::None)
    }

    /// css token placed on the `<li>` element
    pub fn li_token(&self) -> Option<&'static str> {
        match self {
            ItemClass::None => None,
            ItemClass::Dropdown => Some("dropdown"),
            ItemClass::DropdownSubmenu => Some("dropdown-submenu"),
        }
    }
}

/// Scratch state computed per accepted node during a render pass. Threaded
/// through the markup formatter so pages themselves are never mutated and
/// concurrent renders over the same tree stay safe.
#[derive(Debug, Clone, Copy)]
pub struct ItemTag {
    pub class: ItemClass,
    /// depth within the traversed container
    pub depth: usize,
    /// depth relative to `min_depth`
    pub rel_depth: usize,
}
