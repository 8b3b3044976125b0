pub mod error;
pub mod geometry;
pub mod kernel;
pub mod math;
pub mod pipeline;
pub mod section;

pub use error::{Result, SectilisError};
