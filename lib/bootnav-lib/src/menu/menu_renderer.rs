use log::debug;

use crate::{
    NavError,
    navtree::{NavId, NavTree, Page},
};

use super::{
    MenuOptions,
    html::{escape, html_attribs, strip_menu_token},
    item_class::{ItemClass, ItemTag},
};

const EOL: &str = "\n";

/// External half of the acceptance gate, combined with [Page::visible].
/// Errors are propagated unchanged to the render caller.
pub trait Acl {
    fn is_allowed(&self, page: &Page) -> Result<bool, NavError>;
}

/// Translates labels and titles before they get escaped and embedded
pub trait Translator {
    fn translate(&self, text: &str) -> Result<String, NavError>;
}

/// Renders a [NavTree] into nested `<ul>`/`<li>` markup following the
/// Bootstrap dropdown-menu conventions. A single render pass walks the tree
/// in pre-order, filters pages through the acceptance gate and the active
/// branch rules and keeps open/close tags balanced while ascending and
/// descending between accepted pages.
pub struct MenuRenderer {
    options: MenuOptions,
    acl: Option<Box<dyn Acl>>,
    translator: Option<Box<dyn Translator>>,
}

impl MenuRenderer {
    pub fn new(options: MenuOptions) -> MenuRenderer {
        MenuRenderer {
            options,
            acl: None,
            translator: None,
        }
    }

    pub fn with_acl(mut self, acl: impl Acl + 'static) -> Self {
        self.acl = Some(Box::new(acl));
        self
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Box::new(translator));
        self
    }

    pub fn options(&self) -> &MenuOptions {
        &self.options
    }

    /// Visibility and access control gate, a rejected page hides its whole
    /// subtree
    fn accept(&self, page: &Page) -> Result<bool, NavError> {
        if !page.visible {
            return Ok(false);
        }
        if let Some(acl) = &self.acl {
            return acl.is_allowed(page);
        }
        Ok(true)
    }

    /// Find the deepest accepted page within `[min_depth, max_depth]` whose
    /// own active flag is set, first one in pre-order wins on equal depth.
    /// Depths are relative to `from`, its direct children sit at depth 0.
    pub fn find_active(
        &self,
        tree: &NavTree,
        from: NavId,
    ) -> Result<Option<(NavId, usize)>, NavError> {
        let min_depth = self.options.min_depth;
        let max_depth = self.options.max_depth;

        let mut found: Option<(NavId, usize)> = None;
        let mut stack: Vec<(NavId, usize)> = tree[from]
            .children
            .iter()
            .rev()
            .map(|c| (*c, 0))
            .collect();
        while let Some((id, depth)) = stack.pop() {
            let node = &tree[id];
            if !self.accept(&node.page)? {
                // a rejected page can not anchor the active branch and
                // neither can anything below it
                continue;
            }
            if depth >= min_depth
                && node.page.active
                && found.is_none_or(|(_, found_depth)| depth > found_depth)
            {
                found = Some((id, depth));
            }
            if max_depth.is_none_or(|max| depth < max) {
                for child in node.children.iter().rev() {
                    stack.push((*child, depth + 1));
                }
            }
        }
        Ok(found)
    }

    /// Render all descendants of the tree root, see [MenuRenderer::render_from]
    pub fn render(&self, tree: &NavTree) -> Result<String, NavError> {
        self.render_from(tree, tree.root())
    }

    /// Render all descendants of `from` (doesn't have to be the top level!)
    /// into an html string, or an empty string if no page is accepted
    pub fn render_from(&self, tree: &NavTree, from: NavId) -> Result<String, NavError> {
        let options = &self.options;
        let indent = if options.indent.is_empty() {
            "\t"
        } else {
            options.indent.as_str()
        };
        let min_depth = options.min_depth;
        let max_depth = options.max_depth;

        // find deepest active page once, filtering decisions below depend on it
        let found = self.find_active(tree, from)?;
        if let Some((id, depth)) = found {
            debug!(
                "active branch ends at {:?} (depth {depth})",
                tree[id].page.label
            );
        }

        let mut html = String::new();
        // depth of the last accepted page, relative to min_depth
        let mut prev_depth: Option<usize> = None;

        let mut stack: Vec<(NavId, usize)> = tree[from]
            .children
            .iter()
            .rev()
            .map(|c| (*c, 0))
            .collect();
        while let Some((id, depth)) = stack.pop() {
            let node = &tree[id];

            if !self.accept(&node.page)? {
                // not accepted by visibility/acl, skip the whole subtree
                continue;
            }
            if max_depth.is_none_or(|max| depth < max) {
                for child in node.children.iter().rev() {
                    stack.push((*child, depth + 1));
                }
            }
            if depth < min_depth {
                continue;
            }

            let is_active = tree.is_active(id);
            if options.only_active && !is_active {
                // page is not in the active branch itself, but might still
                // qualify through the located active page
                let mut accept = false;
                if let Some((found_id, found_depth)) = found {
                    if tree.has_page(found_id, id) {
                        // direct child of the active page
                        accept = true;
                    } else if tree
                        .parent(found_id)
                        .is_some_and(|parent| tree.has_page(parent, id))
                    {
                        // sibling of the active page, keep it when the active
                        // page has no children or its children sit beyond
                        // max_depth
                        if !tree.has_pages(found_id)
                            || max_depth.is_some_and(|max| found_depth + 1 > max)
                        {
                            accept = true;
                        }
                    }
                }
                if !accept {
                    continue;
                }
            }

            let rel_depth = depth - min_depth;
            let my_indent = indent.repeat(rel_depth * 2);

            match prev_depth {
                Some(prev) if prev > rel_depth => {
                    // ascended, possibly multiple levels because intermediate
                    // pages were filtered out, close li/ul until back at the
                    // current depth
                    for i in ((rel_depth + 1)..=prev).rev() {
                        let prev_indent = indent.repeat(i * 2);
                        html.push_str(&format!("{prev_indent}{indent}</li>{EOL}"));
                        html.push_str(&format!("{prev_indent}</ul>{EOL}"));
                    }
                    html.push_str(&format!("{}</li>{EOL}", indent.repeat(rel_depth + 1)));
                }
                Some(prev) if prev == rel_depth => {
                    // sibling, close the previous list item only
                    html.push_str(&format!("{}</li>{EOL}", indent.repeat(rel_depth * 2 + 1)));
                }
                _ => {
                    // first accepted page or descended one level, open a new
                    // nested list
                    let container_class = if rel_depth == 0 {
                        options.ul_class.as_str()
                    } else {
                        "dropdown-menu"
                    };
                    let container_class = if container_class.is_empty() {
                        String::new()
                    } else {
                        format!(" class=\"{}\"", container_class.trim())
                    };
                    html.push_str(&format!("{my_indent}<ul{container_class}>{EOL}"));
                }
            }

            let tag = ItemTag {
                class: ItemClass::assign(tree.has_pages(id), rel_depth),
                depth,
                rel_depth,
            };

            let mut li_class = match tag.class.li_token() {
                Some(token) => token.to_string(),
                None if rel_depth == 0 => String::new(),
                None => node
                    .page
                    .class
                    .as_deref()
                    .map(strip_menu_token)
                    .unwrap_or_default(),
            };
            if is_active {
                li_class.push_str(" active");
            }
            let li_class = li_class.trim();
            let li_class = if li_class.is_empty() {
                String::new()
            } else {
                format!(" class=\"{li_class}\"")
            };

            html.push_str(&format!("{my_indent}{indent}<li{li_class}>{EOL}"));
            html.push_str(&format!(
                "{my_indent}{indent}{indent}{}{EOL}",
                self.htmlify(&node.page, tag)?
            ));

            prev_depth = Some(rel_depth);
        }

        if let Some(prev) = prev_depth {
            // done iterating, close remaining open ul/li tags
            for i in (0..=prev).rev() {
                let my_indent = indent.repeat(i * 2);
                html.push_str(&format!("{my_indent}{indent}</li>{EOL}"));
                html.push_str(&format!("{my_indent}</ul>{EOL}"));
            }
            let trimmed = html.trim_end_matches(EOL).len();
            html.truncate(trimmed);
        }

        Ok(html)
    }

    /// Format a single page as an `<a>` element when it has an href and a
    /// `<span>` otherwise
    pub fn htmlify(&self, page: &Page, tag: ItemTag) -> Result<String, NavError> {
        let mut label = page.label.clone();
        let mut title = page.title.clone();
        if let Some(translator) = &self.translator {
            if !label.is_empty() {
                label = translator.translate(&label)?;
            }
            title = match title {
                Some(text) if !text.is_empty() => Some(translator.translate(&text)?),
                title => title,
            };
        }

        // externally assigned class, only relevant for leaf pages below the
        // top level; the literal "dropdown" token makes a leaf behave like a
        // toggle
        let external = if tag.class.is_parent() || tag.rel_depth == 0 {
            String::new()
        } else {
            page.class
                .as_deref()
                .map(strip_menu_token)
                .unwrap_or_default()
        };
        let is_dropdown = tag.class.is_parent() || external == "dropdown";
        let class = if is_dropdown {
            "dropdown-toggle".to_string()
        } else {
            external
        };

        let mut attribs: Vec<(&str, Option<String>)> = vec![
            ("id", page.id.clone()),
            ("title", title),
            ("class", Some(class)),
        ];

        let element;
        if let Some(href) = &page.href {
            element = "a";
            let mut href = href.clone();
            let mut toggle = None;
            if !self.options.parents_are_links && is_dropdown {
                // clicking opens the submenu instead of navigating
                href = "#".into();
                toggle = Some("dropdown".to_string());
            }
            attribs.push(("href", Some(href)));
            attribs.push(("target", page.target.clone()));
            attribs.push(("accesskey", page.access_key.clone()));
            attribs.push(("data-toggle", toggle));
        } else {
            element = "span";
        }

        // visual affordance for top level dropdown toggles only
        let append = if !self.options.parents_are_links && is_dropdown && tag.depth == 0 {
            " <b class=\"caret\"></b>"
        } else {
            ""
        };

        Ok(format!(
            "<{element}{}>{}{append}</{element}>",
            html_attribs(&attribs),
            escape(&label)
        ))
    }
}
