pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{
    engine::{PlotEngine, PlotRun},
    pipeline::PlotPipeline,
    session::PlotSession,
    sieve::generate_primes,
    stem_leaf::group_by_stem,
};
pub use domain::model::{PlotSnapshot, PrimeSequence, StemLeafMap};
pub use utils::error::{PlotError, Result};
