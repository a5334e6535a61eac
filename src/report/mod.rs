//! Presentation of matrices and results: column labels, padded tables, JSON.

pub mod label;
pub mod table;

pub use label::column_label;
pub use table::{format_weight, render_table, LabeledResults, Report};
