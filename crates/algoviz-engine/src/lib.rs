//! # algoviz-engine
//!
//! The entry point front ends talk to.
//!
//! A [`Session`] owns one array, linked list, tree and graph, generates and
//! loads them, and runs the sorting, tree and graph algorithms over them with
//! an optional step observer. [`BenchmarkHarness`] times every sort algorithm
//! across a range of sizes.
//!
//! ## Modules
//!
//! - [`config`] - Session configuration with builder methods
//! - [`session`] - Structure ownership and algorithm entry points
//! - [`benchmark`] - Sort timing across sizes
//! - [`generate`] - Random graph generation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod benchmark;
pub mod config;
pub mod generate;
pub mod session;

pub use benchmark::{BenchmarkHarness, ComparisonCurve, PerformancePoint, StructureMode};
pub use config::Config;
pub use generate::random_graph;
pub use session::{PathQuery, Session, StructureKind, TraversalReport};
