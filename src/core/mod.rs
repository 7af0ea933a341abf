//! Core data model.

pub mod report;

pub use report::Report;
