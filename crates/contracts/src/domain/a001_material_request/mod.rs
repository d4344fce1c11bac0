pub mod aggregate;

pub use aggregate::{MaterialRequest, MaterialRequestItem};
