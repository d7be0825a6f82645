pub mod engine;
pub mod pipeline;
pub mod render;
pub mod session;
pub mod sieve;
pub mod stem_leaf;

pub use crate::domain::model::{PlotSnapshot, PrimeSequence, StemLeafMap};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
