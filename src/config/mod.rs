mod types;
mod loader;
mod defaults;
mod validation;

pub use types::*;
pub use loader::load_settings;
