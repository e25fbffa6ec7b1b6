//! Fixed-length generation loop.
//!
//! [`run_simulation`] emits generation 0 (the seeded grid), then evolves and
//! emits once for each further generation up to and including the configured
//! total. There is no early exit: a run either completes every generation or
//! stops at the first error, in which case nothing further is emitted.

use life_grid::Grid;
use tracing::{debug, info};

use crate::evolve::{self, EvolveError};
use crate::output::GenerationSink;

/// Errors that can occur during a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Evolving into a generation failed.
    #[error("evolution into generation {generation} failed: {source}")]
    Evolve {
        /// The generation that could not be computed.
        generation: u64,
        /// The underlying evolution error.
        source: EvolveError,
    },

    /// The sink could not accept a generation.
    #[error("failed to write generation {generation}: {source}")]
    Output {
        /// The generation being written.
        generation: u64,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationResult {
    /// Number of generations handed to the sink, generation 0 included.
    pub generations_emitted: u64,
    /// Live cells after the last generation.
    pub final_population: usize,
}

/// Run `generations` evolution steps, emitting every generation to `sink`.
///
/// The sink sees generations `0..=generations`.
///
/// # Errors
///
/// Returns [`RunnerError::Evolve`] if a step fails and
/// [`RunnerError::Output`] if the sink fails.
pub fn run_simulation(
    grid: &mut Grid,
    generations: u64,
    sink: &mut dyn GenerationSink,
) -> Result<SimulationResult, RunnerError> {
    info!(
        rows = grid.interior_rows(),
        cols = grid.interior_cols(),
        generations,
        population = grid.population(),
        "Simulation starting"
    );

    emit(sink, 0, grid)?;

    for generation in 1..=generations {
        if let Err(source) = evolve::evolve(grid) {
            return Err(RunnerError::Evolve { generation, source });
        }
        emit(sink, generation, grid)?;
    }

    sink.finish().map_err(|source| RunnerError::Output {
        generation: generations,
        source,
    })?;

    Ok(SimulationResult {
        generations_emitted: generations.saturating_add(1),
        final_population: grid.population(),
    })
}

fn emit(sink: &mut dyn GenerationSink, generation: u64, grid: &Grid) -> Result<(), RunnerError> {
    debug!(generation, population = grid.population(), "Generation ready");
    sink.on_generation(generation, grid)
        .map_err(|source| RunnerError::Output { generation, source })
}

/// Log the outcome of a run.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        generations_emitted = result.generations_emitted,
        final_population = result.final_population,
        "Simulation ended"
    );
    if result.final_population == 0 {
        info!("All cells died");
    }
}
