pub mod caesar;
pub mod fit;
