use crate::domain::entities::CategoryTree;
use crate::ui::primitives::text::ColoredText;

/// The whole hierarchy, one category per line, indented by depth
pub struct TreeView<'a> {
    tree: &'a CategoryTree,
    show_keys: bool,
}

impl<'a> TreeView<'a> {
    pub fn new(tree: &'a CategoryTree) -> Self {
        Self {
            tree,
            show_keys: false,
        }
    }

    /// Append each category's search key
    pub fn with_keys(mut self, show_keys: bool) -> Self {
        self.show_keys = show_keys;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        let mut out = String::new();
        out.push_str(
            &ColoredText::info(self.tree.root().name())
                .bold()
                .render(supports_color),
        );
        out.push('\n');

        for (depth, category) in self.tree.walk() {
            out.push_str(&"  ".repeat(depth + 1));
            out.push_str(category.name());
            if self.show_keys && category.is_searchable() {
                out.push(' ');
                out.push_str(
                    &ColoredText::dim(format!("[{}]", category.search_key()))
                        .render(supports_color),
                );
            }
            out.push('\n');
        }

        out
    }
}
