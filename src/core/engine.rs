use crate::core::{Pipeline, PlotSnapshot};
use crate::utils::error::Result;

pub struct PlotEngine<P: Pipeline> {
    pipeline: P,
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct PlotRun {
    pub snapshot: PlotSnapshot,
    pub output_path: String,
}

impl<P: Pipeline> PlotEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Generate and group without writing anything.
    pub fn compute(&self) -> Result<PlotSnapshot> {
        tracing::info!("Generating primes...");
        let primes = self.pipeline.generate()?;
        tracing::info!("Found {} primes", primes.len());

        tracing::info!("Grouping by stem...");
        let snapshot = self.pipeline.group(primes)?;
        tracing::info!("Built {} stem rows", snapshot.stem_leaf.len());

        Ok(snapshot)
    }

    /// Write the bundle for a snapshot that has already been computed.
    pub fn write(&self, snapshot: &PlotSnapshot) -> Result<String> {
        tracing::info!("Writing output bundle...");
        let output_path = self.pipeline.load(snapshot)?;
        tracing::info!("Output saved to: {}", output_path);
        Ok(output_path)
    }

    pub fn run(&self) -> Result<PlotRun> {
        let snapshot = self.compute()?;
        let output_path = self.write(&snapshot)?;

        Ok(PlotRun {
            snapshot,
            output_path,
        })
    }
}
