//! Terminal presentation: width measurement, column layout, colors and the
//! screens the explorer prints.

pub mod columns;
pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod width;
