//! SyllaScan Extract — heuristic syllabus-to-assignments parsing.
//!
//! Everything here is pure computation: lines in, assignments out. The
//! strategies (table-based, line-pattern) are independent; the orchestrator
//! in `syllascan-runtime` decides which to run and feeds every result
//! through the post-filter.

pub mod dates;
pub mod filter;
pub mod lines;
pub mod patterns;
pub mod table_parse;
pub mod tables;

pub use filter::post_filter;
pub use lines::{classify, Line};
pub use patterns::parse_line_patterns;
pub use table_parse::parse_table;
pub use tables::{extract_tables, select_table, Table};
