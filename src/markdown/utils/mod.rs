pub mod similarity;
pub mod text;
