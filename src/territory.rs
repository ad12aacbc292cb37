// Copyright 2025 Cowboy AI, LLC.

//! Territory descriptor
//!
//! The set of environmental factor values known to be present at a
//! candidate planting site. `None` means the category is unknown and the
//! corresponding filter is skipped; an empty list means the category is
//! known to have no values, which is a different statement.

use serde::{Deserialize, Serialize};

use crate::enumerations::{
    AcidityType, FertilityType, HumidityType, LightType, LimitationFactor, SoilType, UsdaZone,
};

/// Description of the territory for composition creation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    /// USDA climate hardiness zone of the site
    pub usda_zone: Option<UsdaZone>,
    /// Stressors present at the site
    pub limitation_factors: Option<Vec<LimitationFactor>>,
    /// Light conditions present at the site
    pub light_types: Option<Vec<LightType>>,
    /// Humidity conditions present at the site
    pub humidity_types: Option<Vec<HumidityType>>,
    /// Soil types present at the site
    pub soil_types: Option<Vec<SoilType>>,
    /// Soil acidity classes present at the site
    pub soil_acidity_types: Option<Vec<AcidityType>>,
    /// Soil fertility classes present at the site
    pub soil_fertility_types: Option<Vec<FertilityType>>,
}

impl Territory {
    /// Create a territory with every category unknown
    pub fn new() -> Self {
        Self::default()
    }

    /// Union `other`'s attributes into this territory
    ///
    /// With `replace` set, categories present in `other` overwrite the
    /// current values instead of being unioned. The USDA zone, being
    /// single-valued, is overwritten whenever `other` has one. Used by the
    /// geometry-derivation step that sums factor polygons into one
    /// territory description.
    pub fn merge(&mut self, other: &Territory, replace: bool) {
        if other.usda_zone.is_some() {
            self.usda_zone = other.usda_zone;
        }
        merge_category(&mut self.limitation_factors, &other.limitation_factors, replace);
        merge_category(&mut self.light_types, &other.light_types, replace);
        merge_category(&mut self.humidity_types, &other.humidity_types, replace);
        merge_category(&mut self.soil_types, &other.soil_types, replace);
        merge_category(&mut self.soil_acidity_types, &other.soil_acidity_types, replace);
        merge_category(
            &mut self.soil_fertility_types,
            &other.soil_fertility_types,
            replace,
        );
    }
}

fn merge_category<T: PartialEq + Clone>(
    current: &mut Option<Vec<T>>,
    update: &Option<Vec<T>>,
    replace: bool,
) {
    let Some(update) = update else {
        return;
    };
    match current {
        Some(values) if !replace => {
            for value in update {
                if !values.contains(value) {
                    values.push(value.clone());
                }
            }
        }
        _ => *current = Some(update.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_unknown() {
        let territory = Territory::new();
        assert!(territory.usda_zone.is_none());
        assert!(territory.limitation_factors.is_none());
        assert!(territory.light_types.is_none());
    }

    #[test]
    fn test_merge_unions_without_duplicates() {
        let mut territory = Territory {
            light_types: Some(vec![LightType::Light, LightType::Darkened]),
            ..Territory::default()
        };
        let other = Territory {
            usda_zone: Some(UsdaZone::from_value(4).unwrap()),
            light_types: Some(vec![LightType::Darkened, LightType::Dark]),
            humidity_types: Some(vec![HumidityType::High]),
            ..Territory::default()
        };

        territory.merge(&other, false);

        assert_eq!(territory.usda_zone, Some(UsdaZone::from_value(4).unwrap()));
        assert_eq!(
            territory.light_types,
            Some(vec![LightType::Light, LightType::Darkened, LightType::Dark])
        );
        assert_eq!(territory.humidity_types, Some(vec![HumidityType::High]));
        // categories absent from `other` stay untouched
        assert!(territory.soil_types.is_none());
    }

    #[test]
    fn test_merge_replace_overwrites() {
        let mut territory = Territory {
            light_types: Some(vec![LightType::Light]),
            soil_types: Some(vec![SoilType::Sandy]),
            ..Territory::default()
        };
        let other = Territory {
            light_types: Some(vec![LightType::Dark]),
            ..Territory::default()
        };

        territory.merge(&other, true);

        assert_eq!(territory.light_types, Some(vec![LightType::Dark]));
        // `other` has no soil data, so replace leaves the current value
        assert_eq!(territory.soil_types, Some(vec![SoilType::Sandy]));
    }

    #[test]
    fn test_empty_list_is_distinct_from_unknown() {
        let known_empty = Territory {
            limitation_factors: Some(vec![]),
            ..Territory::default()
        };
        let unknown = Territory::default();
        assert_ne!(known_empty, unknown);
    }
}
