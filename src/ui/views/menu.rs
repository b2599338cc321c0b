use crate::domain::services::{Navigator, View};
use crate::ui::columns::ColumnLayout;
use crate::ui::primitives::text::ColoredText;

pub const BRANCH_COMMANDS: &str = "[Commands] number: open | s number: search | u: up | q: quit";
pub const LEAF_COMMANDS: &str = "[Commands] s: search this category | u: up | q: quit";
pub const NO_SUBCATEGORIES: &str = "This category has no subcategories.";
pub const PROMPT: &str = "> ";

/// The screen shown before each prompt
pub struct MenuView<'a, 'n> {
    navigator: &'n Navigator<'a>,
    layout: ColumnLayout,
}

impl<'a, 'n> MenuView<'a, 'n> {
    pub fn new(navigator: &'n Navigator<'a>, layout: ColumnLayout) -> Self {
        Self { navigator, layout }
    }

    pub fn render(&self, supports_color: bool) -> String {
        let mut out = String::new();

        let header = format!("--- Current category: {} ---", self.navigator.current().name());
        out.push('\n');
        out.push_str(&ColoredText::info(header).bold().render(supports_color));
        out.push('\n');

        match self.navigator.view() {
            View::Branch => {
                out.push_str(&self.layout.render(self.navigator.children()));
                out.push('\n');
                out.push_str(&ColoredText::dim(BRANCH_COMMANDS).render(supports_color));
            }
            View::Leaf => {
                out.push_str(NO_SUBCATEGORIES);
                out.push_str("\n\n");
                out.push_str(&ColoredText::dim(LEAF_COMMANDS).render(supports_color));
            }
        }
        out.push('\n');

        out
    }
}
