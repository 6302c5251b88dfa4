// Declare the main modules of the crate
pub mod convert;
pub mod error;
pub mod example;
pub mod vector;

pub mod utils;

// Re-export the row types so they are reachable as `exemplar_core::DenseExample` etc.
pub use convert::{FromExample, TryFromExample};
pub use error::ExemplarError;
pub use example::{AutoExample, DenseExample, Example, Row, WeightLabel};
pub use vector::{AutoVector, DataVector, DenseVector, AUTO_DENSITY_THRESHOLD};
