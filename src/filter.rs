// Copyright 2025 Cowboy AI, LLC.

//! Eligibility filter
//!
//! Reduces the full catalog to plants tolerant of a territory. Preference
//! categories (light, humidity, soil type/acidity/fertility) are
//! alternatives: one acceptable option suffices. Limitation factors are
//! stressors actually present at the site: every one of them must be
//! tolerated. The USDA zone is a single value matched exactly. A `None`
//! category is unknown and skipped, and a known-empty list imposes no
//! constraint either; an empty preference map leaves a plant unconstrained
//! for that category.

use tracing::debug;

use crate::enumerations::ToleranceType;
use crate::plant::Plant;
use crate::territory::Territory;

/// Filter the catalog down to plants tolerant of the territory
///
/// Filters are a conjunction; their order only matters for short-circuiting
/// once the candidate set is empty.
pub fn filter_catalog(catalog: &[Plant], territory: &Territory) -> Vec<Plant> {
    let mut candidates: Vec<Plant> = catalog.to_vec();

    if let Some(light_types) = territory.light_types.as_deref().filter(|v| !v.is_empty()) {
        candidates.retain(|plant| {
            plant.light_preferences.is_empty()
                || light_types
                    .iter()
                    .any(|lt| plant.light_tolerance(*lt) != ToleranceType::Negative)
        });
        debug!(candidates = candidates.len(), "after light filter");
        if candidates.is_empty() {
            return candidates;
        }
    }

    if let Some(humidity_types) = territory.humidity_types.as_deref().filter(|v| !v.is_empty()) {
        candidates.retain(|plant| {
            plant.humidity_preferences.is_empty()
                || humidity_types
                    .iter()
                    .any(|ht| plant.humidity_tolerance(*ht) != ToleranceType::Negative)
        });
        debug!(candidates = candidates.len(), "after humidity filter");
        if candidates.is_empty() {
            return candidates;
        }
    }

    if let Some(soil_types) = territory.soil_types.as_deref().filter(|v| !v.is_empty()) {
        candidates.retain(|plant| {
            plant.soil_type_preferences.is_empty()
                || soil_types
                    .iter()
                    .any(|st| plant.soil_type_tolerance(*st) != ToleranceType::Negative)
        });
        debug!(candidates = candidates.len(), "after soil type filter");
        if candidates.is_empty() {
            return candidates;
        }
    }

    if let Some(acidity_types) = territory.soil_acidity_types.as_deref().filter(|v| !v.is_empty()) {
        candidates.retain(|plant| {
            plant.soil_acidity_preferences.is_empty()
                || acidity_types
                    .iter()
                    .any(|at| plant.soil_acidity_tolerance(*at) != ToleranceType::Negative)
        });
        debug!(candidates = candidates.len(), "after soil acidity filter");
        if candidates.is_empty() {
            return candidates;
        }
    }

    if let Some(fertility_types) = territory.soil_fertility_types.as_deref().filter(|v| !v.is_empty()) {
        candidates.retain(|plant| {
            plant.soil_fertility_preferences.is_empty()
                || fertility_types
                    .iter()
                    .any(|ft| plant.soil_fertility_tolerance(*ft) != ToleranceType::Negative)
        });
        debug!(candidates = candidates.len(), "after soil fertility filter");
        if candidates.is_empty() {
            return candidates;
        }
    }

    // stressors present at the site: all of them must be tolerated
    if let Some(limitation_factors) = territory.limitation_factors.as_deref().filter(|v| !v.is_empty()) {
        candidates.retain(|plant| {
            plant.limitation_factors_resistances.is_empty()
                || limitation_factors
                    .iter()
                    .all(|lf| plant.limitation_resistance(*lf) != ToleranceType::Negative)
        });
        debug!(candidates = candidates.len(), "after limitation factor filter");
        if candidates.is_empty() {
            return candidates;
        }
    }

    if let Some(zone) = territory.usda_zone {
        candidates.retain(|plant| {
            plant.usda_zone_preferences.is_empty()
                || plant.usda_zone_tolerance(zone) != ToleranceType::Negative
        });
        debug!(candidates = candidates.len(), "after USDA zone filter");
    }

    candidates
}
