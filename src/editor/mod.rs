mod controller;
mod lens;

pub use controller::{compute_update_edits, create_toc, is_markdown, on_will_save, update_toc};
pub use lens::{toc_lenses, TocLens};
