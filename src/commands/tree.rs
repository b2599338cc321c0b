//! Tree command handler

use anyhow::Result;

use recipe_explorer::config::Config;
use recipe_explorer::ui::context::UiContext;
use recipe_explorer::ui::views::TreeView;

pub fn cmd_tree(config: &Config, ui: &UiContext, keys: bool) -> Result<()> {
    let tree = super::load_catalog(config)?;
    print!("{}", TreeView::new(&tree).with_keys(keys).render(ui.color));
    Ok(())
}
