pub mod output;
pub mod paths;
pub mod walker;

pub use output::{create_writer, render, OutputFormat, OutputWriter};
pub use paths::{expand_tilde, resolve};
pub use walker::{find_source_files, FileWalker};
