mod anchor;
mod detector;
mod generator;
mod parser;
mod patch;

pub use detector::detect_toc_blocks;
pub use generator::generate_toc;
pub use parser::build_toc;
pub use patch::{compute_patch, TocPatch};
