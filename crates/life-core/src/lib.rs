//! Evolution engine, seeding, output and run loop for the Life simulation.
//!
//! This crate owns everything that happens to a [`Grid`] after it has been
//! constructed: populating it from a seed, stepping it through Conway's
//! B3/S23 rule, and emitting each generation to an output sink.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `life-config.yaml` into
//!   strongly-typed structs, with environment overrides.
//! - [`evolve`] -- The transition rule and the single-step [`evolve`] function.
//! - [`neighbors`] -- Moore-neighborhood counting and the per-step
//!   [`NeighborCounts`] scratch buffer.
//! - [`output`] -- [`GenerationSink`] trait with text and JSON printers.
//! - [`runner`] -- The fixed-length generation loop.
//! - [`seed`] -- Byte-level parser for the initial-state text format.
//!
//! [`Grid`]: life_grid::Grid
//! [`evolve`]: evolve::evolve
//! [`NeighborCounts`]: neighbors::NeighborCounts
//! [`GenerationSink`]: output::GenerationSink

pub mod config;
pub mod evolve;
pub mod neighbors;
pub mod output;
pub mod runner;
pub mod seed;
