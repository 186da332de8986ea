// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

pub use args::Args;
pub use output::{content_label, print_json, print_report, print_summary, FileReport};
