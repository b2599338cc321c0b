//! Column formatter for sibling category menus.
//!
//! Items are numbered from 1 and laid out row by row, `columns` per row.
//! Every item except the last in a row (and the very last item) is padded
//! to the widest label plus a four-space gutter, so columns line up even
//! when CJK and ASCII labels are mixed.

use crate::domain::entities::Category;

use super::width::WidthMode;

/// Spaces between the widest label and the next column
pub const GUTTER: usize = 4;

/// Default number of columns
pub const DEFAULT_COLUMNS: usize = 2;

/// Layout settings for a numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    columns: usize,
    width_mode: WidthMode,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS, WidthMode::default())
    }
}

impl ColumnLayout {
    /// A column count of 0 is treated as 1
    pub fn new(columns: usize, width_mode: WidthMode) -> Self {
        Self {
            columns: columns.max(1),
            width_mode,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn width_mode(&self) -> WidthMode {
        self.width_mode
    }

    /// Render categories by name
    pub fn render(&self, items: &[Category]) -> String {
        let labels: Vec<&str> = items.iter().map(Category::name).collect();
        self.render_labels(&labels)
    }

    /// Render arbitrary labels
    pub fn render_labels<S: AsRef<str>>(&self, labels: &[S]) -> String {
        let widths: Vec<usize> = labels
            .iter()
            .map(|l| self.width_mode.measure(l.as_ref()))
            .collect();
        let max_width = widths.iter().copied().max().unwrap_or(0);
        let last = labels.len().saturating_sub(1);

        let mut out = String::new();
        for (i, (label, width)) in labels.iter().zip(&widths).enumerate() {
            out.push_str(&format!("  {:>2}: {}", i + 1, label.as_ref()));

            if (i + 1) % self.columns != 0 && i < last {
                let padding = (max_width + GUTTER).saturating_sub(*width);
                out.push_str(&" ".repeat(padding));
            } else {
                out.push('\n');
            }
        }
        out
    }
}
