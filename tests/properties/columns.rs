//! Property tests for the column formatter.

use proptest::prelude::*;

use recipe_explorer::ui::columns::{ColumnLayout, GUTTER};
use recipe_explorer::ui::width::WidthMode;

fn label() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z]{1,12}",
        "[ぁ-んァ-ン一-龥]{1,6}",
        "[A-Za-z]{1,4}[ぁ-ん]{1,4}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one row per `columns` items, always newline-terminated, and
    /// every index appears.
    #[test]
    fn property_rows_and_indices(
        labels in proptest::collection::vec(label(), 1..20),
        columns in 1usize..5,
    ) {
        let out = ColumnLayout::new(columns, WidthMode::Bytes).render_labels(&labels);

        prop_assert!(out.ends_with('\n'));
        prop_assert_eq!(out.lines().count(), labels.len().div_ceil(columns));
        for i in 1..=labels.len() {
            let index_marker = format!("{:>2}: ", i);
            prop_assert!(out.contains(&index_marker));
        }
    }

    /// PROPERTY: in two-column mode the second item of every row starts at
    /// the same measured offset: prefix, widest label, gutter.
    #[test]
    fn property_second_column_aligns(labels in proptest::collection::vec(label(), 2..12)) {
        let mode = WidthMode::Bytes;
        let out = ColumnLayout::new(2, mode).render_labels(&labels);
        let max_width = labels.iter().map(|l| mode.measure(l)).max().unwrap_or(0);
        let prefix = "  00: ".len();

        for (row, line) in out.lines().enumerate() {
            let second = row * 2 + 2;
            if second > labels.len() {
                break;
            }
            let marker = format!("{:>2}: ", second);
            let pos = line.find(&marker).expect("second index on row");
            // "  " then the right-aligned index begins the second item
            let item_start = pos - 2;
            prop_assert_eq!(mode.measure(&line[..item_start]), prefix + max_width + GUTTER);
        }
    }

    /// PROPERTY: rendering never leaves trailing spaces on a line.
    #[test]
    fn property_no_trailing_spaces(
        labels in proptest::collection::vec(label(), 0..15),
        columns in 1usize..4,
    ) {
        let out = ColumnLayout::new(columns, WidthMode::Unicode).render_labels(&labels);
        for line in out.lines() {
            prop_assert!(!line.ends_with(' '), "trailing space in {:?}", line);
        }
    }
}
