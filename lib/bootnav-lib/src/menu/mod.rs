mod html;
mod item_class;
mod menu_renderer;
mod options;

pub use item_class::{ItemClass, ItemTag};
pub use menu_renderer::{Acl, MenuRenderer, Translator};
pub use options::MenuOptions;
