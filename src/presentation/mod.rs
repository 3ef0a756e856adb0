//! Presentation layer for command-line output.

pub mod output;

pub use output::ResultPrinter;
