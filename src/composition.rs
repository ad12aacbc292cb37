// Copyright 2025 Cowboy AI, LLC.

//! Composition engine entry point
//!
//! Wires the eligibility filter, the compatibility graph builder, the
//! community partitioner and the assembler into one operation. The engine
//! is pure and degrades to empty results: no eligible plants and no present
//! plants means no compositions, never an error.

use tracing::debug;

use crate::cohabitation::{CohabitationTable, GeneraCohabitation};
use crate::filter::filter_catalog;
use crate::graph::CompatibilityGraph;
use crate::partition::{GreedyModularity, Partitioner};
use crate::plant::Plant;
use crate::territory::Territory;

/// Return plant composition variants for the given territory
///
/// Each returned composition is the plants already present at the site
/// followed by one community of mutually-agreeable newcomers. Uses the
/// default greedy modularity partitioner.
pub fn get_compositions(
    plants_available: &[Plant],
    territory: &Territory,
    cohabitation_attributes: &[GeneraCohabitation],
    plants_present: &[Plant],
) -> Vec<Vec<Plant>> {
    get_compositions_with(
        &GreedyModularity::default(),
        plants_available,
        territory,
        cohabitation_attributes,
        plants_present,
    )
}

/// Return plant composition variants using a caller-chosen partitioner
pub fn get_compositions_with(
    partitioner: &dyn Partitioner,
    plants_available: &[Plant],
    territory: &Territory,
    cohabitation_attributes: &[GeneraCohabitation],
    plants_present: &[Plant],
) -> Vec<Vec<Plant>> {
    debug!(
        light = field_len(&territory.light_types),
        limitation_factors = field_len(&territory.limitation_factors),
        humidity = field_len(&territory.humidity_types),
        soil = field_len(&territory.soil_types),
        soil_acidity = field_len(&territory.soil_acidity_types),
        soil_fertility = field_len(&territory.soil_fertility_types),
        usda_zone = territory.usda_zone.map(|z| z.to_string()),
        "composition requested"
    );

    let eligible = filter_catalog(plants_available, territory);
    if eligible.is_empty() {
        return if plants_present.is_empty() {
            Vec::new()
        } else {
            vec![plants_present.to_vec()]
        };
    }

    let communities = if eligible.len() > 1 {
        // the graph is built over the full catalog and restricted to the
        // eligible set, so edge weights never depend on the filter outcome
        let full_graph = CompatibilityGraph::build(
            plants_available,
            &CohabitationTable::from_entries(cohabitation_attributes),
        );
        let eligible_graph =
            full_graph.subgraph(eligible.iter().map(|plant| plant.name_ru.as_str()));
        partitioner.partition(&eligible_graph)
    } else {
        vec![vec![eligible[0].name_ru.clone()]]
    };

    assemble(&communities, plants_present, plants_available)
}

/// Merge each community with the plants already present at the site
///
/// Composition order follows the partitioner's community order; members are
/// present plants first (input order), then community members. Callers that
/// need a stable display order should sort by a secondary key themselves.
pub fn assemble(
    communities: &[Vec<String>],
    plants_present: &[Plant],
    plants_available: &[Plant],
) -> Vec<Vec<Plant>> {
    if communities.iter().all(Vec::is_empty) && plants_present.is_empty() {
        return Vec::new();
    }
    if communities.iter().all(Vec::is_empty) {
        return vec![plants_present.to_vec()];
    }

    let present_names: Vec<&str> = plants_present
        .iter()
        .map(|plant| plant.name_ru.as_str())
        .collect();

    communities
        .iter()
        .map(|community| {
            let mut composition = plants_present.to_vec();
            composition.extend(
                plants_available
                    .iter()
                    .filter(|plant| {
                        community.contains(&plant.name_ru)
                            && !present_names.contains(&plant.name_ru.as_str())
                    })
                    .cloned(),
            );
            composition
        })
        .collect()
}

fn field_len<T>(field: &Option<Vec<T>>) -> Option<usize> {
    field.as_ref().map(Vec::len)
}
