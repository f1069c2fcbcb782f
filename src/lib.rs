//! Command-line aggregator for lists of floating-point numbers.
//!
//! One-shot pipeline: a source (stdin or file) is decoded from delimited
//! text or a structured document into a [`data::model::NumericList`], an
//! aggregate operation (sum, min/max, or filter-below-four) runs over it,
//! and the result is encoded and written to a sink. Failures carry the
//! process exit codes defined in [`error::exit_code`].

pub mod app;
pub mod config;
pub mod data;
pub mod error;
