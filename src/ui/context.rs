use crate::config::{ColorMode, Config};
use crate::presentation::ColorWhen;
use crate::ui::columns::ColumnLayout;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::width::WidthMode;

/// Resolved presentation settings for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub layout: ColumnLayout,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            caps,
            color,
            unicode,
            layout: ColumnLayout::new(config.output.columns, config.output.width_mode),
        }
    }

    /// Uncolored ASCII output with the given layout (tests, pipes)
    pub fn plain(columns: usize, width_mode: WidthMode) -> Self {
        Self {
            caps: TerminalCapabilities {
                is_tty: false,
                interactive_input: false,
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
            },
            color: false,
            unicode: false,
            layout: ColumnLayout::new(columns, width_mode),
        }
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::plain(crate::ui::columns::DEFAULT_COLUMNS, WidthMode::default())
    }
}
