pub mod config_warnings;
pub mod menu;
pub mod ranking;
pub mod status;
pub mod tree;

pub use config_warnings::render_config_warnings;
pub use menu::MenuView;
pub use ranking::RankingView;
pub use tree::TreeView;
