/// A single navigable page. The renderer only reads these fields; structural
/// state computed during a render (depth, dropdown classing) is threaded
/// through the formatting calls instead of being written back here.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// html id attribute
    pub id: Option<String>,
    pub label: String,
    pub title: Option<String>,
    /// where the page links to, `None` makes the page non-navigable and it
    /// will render as a `<span>` instead of a hyperlink
    pub href: Option<String>,
    pub target: Option<String>,
    pub access_key: Option<String>,
    /// caller-assignable css class
    pub class: Option<String>,
    pub visible: bool,
    /// whether this is the currently active page, ancestors of an active
    /// page count as active through [NavTree::is_active](super::NavTree::is_active)
    pub active: bool,
}

impl Page {
    pub fn new(label: impl Into<String>) -> Page {
        Page {
            label: label.into(),
            visible: true,
            ..Page::default()
        }
    }

    pub fn with_href(label: impl Into<String>, href: impl Into<String>) -> Page {
        Page {
            href: Some(href.into()),
            ..Page::new(label)
        }
    }
}
