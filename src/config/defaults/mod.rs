pub mod values;

// Serde default functions for the settings types
pub use values::*;
