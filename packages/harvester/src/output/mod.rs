//! Output generation for the rebuilt taxonomy.

mod writer;

pub use writer::{render, save_output, OutputFormat};
