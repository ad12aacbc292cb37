// Copyright 2025 Cowboy AI, LLC.

//! # Derevo
//!
//! Plant composition engine: recommends sets of plants ("compositions")
//! that can coexist on a given territory without violating pairwise genus
//! antagonisms or environmental tolerances.
//!
//! The pipeline:
//! - **Eligibility Filter**: reduce the catalog to plants tolerant of the
//!   territory's light, humidity, soil, limitation-factor and USDA-zone
//!   conditions
//! - **Compatibility Graph**: one undirected weighted edge per plant pair,
//!   weight derived from genus-level cohabitation data
//! - **Community Partitioner**: greedy modularity maximization groups
//!   mutually non-antagonistic plants
//! - **Composition Assembler**: merge each community with the plants
//!   already present at the site
//!
//! ## Design Principles
//!
//! 1. **Purity**: `get_compositions` takes immutable inputs and produces
//!    new outputs, so it is thread-reentrant without coordination
//! 2. **Degradation over failure**: empty results, never errors, in the
//!    engine's normal operating range
//! 3. **Determinism**: node and edge iteration order and community
//!    tie-breaking are pinned, so identical inputs yield identical
//!    compositions
//! 4. **Explicit context**: the catalog cache is a value handed to
//!    callers, not a module-level singleton

#![warn(missing_docs)]

mod cache;
mod cohabitation;
mod composition;
pub mod enumerations;
mod errors;
mod filter;
mod graph;
mod partition;
mod plant;
mod territory;

// Re-export core types
pub use cache::{CatalogCache, CatalogSnapshot, CatalogSource};
pub use cohabitation::{CohabitationTable, GeneraCohabitation};
pub use composition::{assemble, get_compositions, get_compositions_with};
pub use enumerations::{
    AcidityType, AggressivenessLevel, CohabitationType, FertilityType, HumidityType, LifeForm,
    LightType, LimitationFactor, SoilType, SurvivabilityLevel, ToleranceType, UsdaZone,
};
pub use errors::{CompositionError, CompositionResult};
pub use filter::filter_catalog;
pub use graph::{CompatibilityGraph, NodeAttributes};
pub use partition::{GreedyModularity, Partitioner};
pub use plant::Plant;
pub use territory::Territory;
