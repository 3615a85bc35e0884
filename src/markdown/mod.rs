pub mod toc;
pub mod types;
pub mod utils;

pub use toc::build_toc;
pub use types::HeadingEntry;
