// Copyright 2025 Cowboy AI, LLC.

//! Plant catalog record
//!
//! A plant carries per-factor tolerance maps; an absent entry for a factor
//! value is treated as [`ToleranceType::Neutral`] (acceptable, not
//! preferred).

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enumerations::{
    AcidityType, AggressivenessLevel, FertilityType, HumidityType, LifeForm, LightType,
    LimitationFactor, SoilType, SurvivabilityLevel, ToleranceType, UsdaZone,
};

/// A catalog entry describing one plant species
///
/// `name_ru` is the unique display key used as graph node identity; a
/// catalog with duplicate names is a data-quality defect upstream, not a
/// runtime fault here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    /// Russian display name, unique within a catalog
    pub name_ru: String,
    /// Latin name
    pub name_latin: String,
    /// Genus name, linking the plant to cohabitation data
    pub genus: Option<String>,
    /// Life form of the plant
    pub life_form: Option<LifeForm>,
    /// Resistance to site stressors
    pub limitation_factors_resistances: HashMap<LimitationFactor, ToleranceType>,
    /// Tolerance per USDA climate zone
    pub usda_zone_preferences: HashMap<UsdaZone, ToleranceType>,
    /// Tolerance per light condition
    pub light_preferences: HashMap<LightType, ToleranceType>,
    /// Tolerance per humidity condition
    pub humidity_preferences: HashMap<HumidityType, ToleranceType>,
    /// Tolerance per soil acidity class
    pub soil_acidity_preferences: HashMap<AcidityType, ToleranceType>,
    /// Tolerance per soil fertility class
    pub soil_fertility_preferences: HashMap<FertilityType, ToleranceType>,
    /// Tolerance per soil type
    pub soil_type_preferences: HashMap<SoilType, ToleranceType>,
    /// Spread aggressiveness
    pub aggressiveness: AggressivenessLevel,
    /// Survivability level
    pub survivability: SurvivabilityLevel,
    /// Whether the species is invasive
    pub is_invasive: bool,
}

impl Plant {
    /// Create a plant with empty tolerance maps and default levels
    pub fn new(name_ru: impl Into<String>, name_latin: impl Into<String>) -> Self {
        Self {
            name_ru: name_ru.into(),
            name_latin: name_latin.into(),
            genus: None,
            life_form: None,
            limitation_factors_resistances: HashMap::new(),
            usda_zone_preferences: HashMap::new(),
            light_preferences: HashMap::new(),
            humidity_preferences: HashMap::new(),
            soil_acidity_preferences: HashMap::new(),
            soil_fertility_preferences: HashMap::new(),
            soil_type_preferences: HashMap::new(),
            aggressiveness: AggressivenessLevel::default(),
            survivability: SurvivabilityLevel::default(),
            is_invasive: false,
        }
    }

    /// Set the genus
    pub fn with_genus(mut self, genus: impl Into<String>) -> Self {
        self.genus = Some(genus.into());
        self
    }

    /// Set the life form
    pub fn with_life_form(mut self, life_form: LifeForm) -> Self {
        self.life_form = Some(life_form);
        self
    }

    /// Add a limitation factor resistance entry
    pub fn with_limitation_factor(
        mut self,
        factor: LimitationFactor,
        tolerance: ToleranceType,
    ) -> Self {
        self.limitation_factors_resistances.insert(factor, tolerance);
        self
    }

    /// Add a USDA zone preference entry
    pub fn with_usda_zone(mut self, zone: UsdaZone, tolerance: ToleranceType) -> Self {
        self.usda_zone_preferences.insert(zone, tolerance);
        self
    }

    /// Add a light preference entry
    pub fn with_light(mut self, light: LightType, tolerance: ToleranceType) -> Self {
        self.light_preferences.insert(light, tolerance);
        self
    }

    /// Add a humidity preference entry
    pub fn with_humidity(mut self, humidity: HumidityType, tolerance: ToleranceType) -> Self {
        self.humidity_preferences.insert(humidity, tolerance);
        self
    }

    /// Add a soil acidity preference entry
    pub fn with_soil_acidity(mut self, acidity: AcidityType, tolerance: ToleranceType) -> Self {
        self.soil_acidity_preferences.insert(acidity, tolerance);
        self
    }

    /// Add a soil fertility preference entry
    pub fn with_soil_fertility(
        mut self,
        fertility: FertilityType,
        tolerance: ToleranceType,
    ) -> Self {
        self.soil_fertility_preferences.insert(fertility, tolerance);
        self
    }

    /// Add a soil type preference entry
    pub fn with_soil_type(mut self, soil: SoilType, tolerance: ToleranceType) -> Self {
        self.soil_type_preferences.insert(soil, tolerance);
        self
    }

    /// Set the aggressiveness level
    pub fn with_aggressiveness(mut self, level: AggressivenessLevel) -> Self {
        self.aggressiveness = level;
        self
    }

    /// Set the survivability level
    pub fn with_survivability(mut self, level: SurvivabilityLevel) -> Self {
        self.survivability = level;
        self
    }

    /// Mark the species as invasive
    pub fn invasive(mut self) -> Self {
        self.is_invasive = true;
        self
    }

    /// Tolerance toward a light condition, Neutral when unlisted
    pub fn light_tolerance(&self, light: LightType) -> ToleranceType {
        self.light_preferences
            .get(&light)
            .copied()
            .unwrap_or(ToleranceType::Neutral)
    }

    /// Tolerance toward a humidity condition, Neutral when unlisted
    pub fn humidity_tolerance(&self, humidity: HumidityType) -> ToleranceType {
        self.humidity_preferences
            .get(&humidity)
            .copied()
            .unwrap_or(ToleranceType::Neutral)
    }

    /// Tolerance toward a soil type, Neutral when unlisted
    pub fn soil_type_tolerance(&self, soil: SoilType) -> ToleranceType {
        self.soil_type_preferences
            .get(&soil)
            .copied()
            .unwrap_or(ToleranceType::Neutral)
    }

    /// Tolerance toward a soil acidity class, Neutral when unlisted
    pub fn soil_acidity_tolerance(&self, acidity: AcidityType) -> ToleranceType {
        self.soil_acidity_preferences
            .get(&acidity)
            .copied()
            .unwrap_or(ToleranceType::Neutral)
    }

    /// Tolerance toward a soil fertility class, Neutral when unlisted
    pub fn soil_fertility_tolerance(&self, fertility: FertilityType) -> ToleranceType {
        self.soil_fertility_preferences
            .get(&fertility)
            .copied()
            .unwrap_or(ToleranceType::Neutral)
    }

    /// Resistance to a limitation factor, Neutral when unlisted
    pub fn limitation_resistance(&self, factor: LimitationFactor) -> ToleranceType {
        self.limitation_factors_resistances
            .get(&factor)
            .copied()
            .unwrap_or(ToleranceType::Neutral)
    }

    /// Tolerance toward a USDA zone, Neutral when unlisted
    pub fn usda_zone_tolerance(&self, zone: UsdaZone) -> ToleranceType {
        self.usda_zone_preferences
            .get(&zone)
            .copied()
            .unwrap_or(ToleranceType::Neutral)
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plant(name_ru='{}', name_latin='{}', genus='{}')",
            self.name_ru,
            self.name_latin,
            self.genus.as_deref().unwrap_or("-"),
        )
    }
}
