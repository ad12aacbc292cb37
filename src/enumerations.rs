// Copyright 2025 Cowboy AI, LLC.

//! Factor enumerations used by plants, territories and cohabitation data
//!
//! Every factor enum resolves raw catalog names (canonical identifiers plus
//! the localized synonyms found in source spreadsheets) through `from_name`,
//! so unmapped names surface as errors in a validation pass instead of being
//! silently dropped inside the graph builder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CompositionError, CompositionResult};

/// Tri-state acceptability of a plant toward one factor value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToleranceType {
    /// The plant rejects the factor value
    Negative,
    /// The plant accepts the factor value without preference
    Neutral,
    /// The plant prefers the factor value
    Positive,
}

impl ToleranceType {
    /// Construct from an integer in [-1, 1]
    pub fn from_value(value: i8) -> CompositionResult<Self> {
        match value {
            -1 => Ok(ToleranceType::Negative),
            0 => Ok(ToleranceType::Neutral),
            1 => Ok(ToleranceType::Positive),
            other => Err(CompositionError::InvalidValue {
                kind: "ToleranceType",
                value: other.to_string(),
            }),
        }
    }

    /// Integer form in [-1, 1]
    pub fn to_value(self) -> i8 {
        match self {
            ToleranceType::Negative => -1,
            ToleranceType::Neutral => 0,
            ToleranceType::Positive => 1,
        }
    }
}

impl fmt::Display for ToleranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToleranceType::Negative => "NEGATIVE",
            ToleranceType::Neutral => "NEUTRAL",
            ToleranceType::Positive => "POSITIVE",
        };
        write!(f, "{name}")
    }
}

/// Recorded compatibility outcome between two plant genera
///
/// Kept distinct from [`ToleranceType`]: one describes a plant-to-factor
/// relation, the other a genus-to-genus relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CohabitationType {
    /// The genera suppress each other
    Negative,
    /// No recorded effect either way
    Neutral,
    /// The genera benefit each other
    Positive,
}

impl CohabitationType {
    /// Edge weight contributed to the compatibility graph (-1, 0 or 1)
    pub fn to_weight(self) -> i8 {
        match self {
            CohabitationType::Negative => -1,
            CohabitationType::Neutral => 0,
            CohabitationType::Positive => 1,
        }
    }
}

impl fmt::Display for CohabitationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CohabitationType::Negative => "NEGATIVE",
            CohabitationType::Neutral => "NEUTRAL",
            CohabitationType::Positive => "POSITIVE",
        };
        write!(f, "{name}")
    }
}

/// Light conditions present on a territory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightType {
    /// Full shade
    Dark,
    /// Partial shade
    Darkened,
    /// Full light
    Light,
}

impl LightType {
    /// Resolve a raw catalog name (canonical or localized synonym)
    pub fn from_name(name: &str) -> CompositionResult<Self> {
        match normalize(name).as_str() {
            "dark" | "тень" => Ok(LightType::Dark),
            "darkened" | "полутень" => Ok(LightType::Darkened),
            "light" | "полное освещение" => Ok(LightType::Light),
            _ => Err(unknown("LightType", name)),
        }
    }
}

impl fmt::Display for LightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LightType::Dark => "DARK",
            LightType::Darkened => "DARKENED",
            LightType::Light => "LIGHT",
        };
        write!(f, "{name}")
    }
}

/// Humidity conditions present on a territory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HumidityType {
    /// Dry conditions
    Low,
    /// Average humidity
    Normal,
    /// Wet conditions, including air humidity
    High,
}

impl HumidityType {
    /// Resolve a raw catalog name (canonical or localized synonym)
    pub fn from_name(name: &str) -> CompositionResult<Self> {
        match normalize(name).as_str() {
            "low" | "мало воды" => Ok(HumidityType::Low),
            "normal" | "средняя" => Ok(HumidityType::Normal),
            "high" | "много воды" | "влажность в воздухе" => Ok(HumidityType::High),
            _ => Err(unknown("HumidityType", name)),
        }
    }
}

impl fmt::Display for HumidityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HumidityType::Low => "LOW",
            HumidityType::Normal => "NORMAL",
            HumidityType::High => "HIGH",
        };
        write!(f, "{name}")
    }
}

/// Soil composition classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    /// Sandy soil
    Sandy,
    /// Sandy loam
    Subsandy,
    /// Loamy soil
    Loamy,
    /// Clay soil
    Clayey,
    /// Rocky soil
    Rocky,
    /// Gravelly soil
    Gravelly,
    /// Heavy soil
    Heavy,
    /// Well-drained soil
    Drained,
}

impl SoilType {
    /// Resolve a raw catalog name (canonical or localized synonym)
    pub fn from_name(name: &str) -> CompositionResult<Self> {
        match normalize(name).as_str() {
            "sandy" | "песчаная" => Ok(SoilType::Sandy),
            "subsandy" | "супесчаная" => Ok(SoilType::Subsandy),
            "loamy" | "суглинистая" => Ok(SoilType::Loamy),
            "clayey" | "глинистая" => Ok(SoilType::Clayey),
            "rocky" | "каменистая" | "каменистые" => Ok(SoilType::Rocky),
            "gravelly" | "щебнистые" => Ok(SoilType::Gravelly),
            "heavy" | "тяжёлая" | "тяжелая" => Ok(SoilType::Heavy),
            "drained" | "хорошо дренированная" => Ok(SoilType::Drained),
            _ => Err(unknown("SoilType", name)),
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SoilType::Sandy => "SANDY",
            SoilType::Subsandy => "SUBSANDY",
            SoilType::Loamy => "LOAMY",
            SoilType::Clayey => "CLAYEY",
            SoilType::Rocky => "ROCKY",
            SoilType::Gravelly => "GRAVELLY",
            SoilType::Heavy => "HEAVY",
            SoilType::Drained => "DRAINED",
        };
        write!(f, "{name}")
    }
}

/// Soil acidity classes derived from pH
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcidityType {
    /// pH 3 and below
    StronglyAcidic,
    /// pH 4-5
    Acidic,
    /// pH 6
    SlightlyAcidic,
    /// pH 7
    Neutral,
    /// pH 8
    SlightlyAlkaline,
    /// pH 9-10
    Alkaline,
    /// pH 11 and above
    StronglyAlkaline,
}

impl AcidityType {
    /// Classify a pH value into an acidity class
    pub fn from_ph(ph: i8) -> Self {
        match ph {
            i8::MIN..=3 => AcidityType::StronglyAcidic,
            4..=5 => AcidityType::Acidic,
            6 => AcidityType::SlightlyAcidic,
            7 => AcidityType::Neutral,
            8 => AcidityType::SlightlyAlkaline,
            9..=10 => AcidityType::Alkaline,
            _ => AcidityType::StronglyAlkaline,
        }
    }

    /// Resolve a raw catalog name (canonical or localized synonym)
    pub fn from_name(name: &str) -> CompositionResult<Self> {
        match normalize(name).as_str() {
            "strongly_acidic" | "сильнокислые (4)" => Ok(AcidityType::StronglyAcidic),
            "acidic" | "кислые (5)" => Ok(AcidityType::Acidic),
            "slightly_acidic" | "слабокислые (6)" => Ok(AcidityType::SlightlyAcidic),
            "neutral" | "нейтральные (7)" => Ok(AcidityType::Neutral),
            "slightly_alkaline" | "слабощелочные (8)" => Ok(AcidityType::SlightlyAlkaline),
            "alkaline" | "щелочные (9)" => Ok(AcidityType::Alkaline),
            "strongly_alkaline" | "сильнощелочные (10)" => Ok(AcidityType::StronglyAlkaline),
            _ => Err(unknown("AcidityType", name)),
        }
    }
}

impl fmt::Display for AcidityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AcidityType::StronglyAcidic => "STRONGLY_ACIDIC",
            AcidityType::Acidic => "ACIDIC",
            AcidityType::SlightlyAcidic => "SLIGHTLY_ACIDIC",
            AcidityType::Neutral => "NEUTRAL",
            AcidityType::SlightlyAlkaline => "SLIGHTLY_ALKALINE",
            AcidityType::Alkaline => "ALKALINE",
            AcidityType::StronglyAlkaline => "STRONGLY_ALKALINE",
        };
        write!(f, "{name}")
    }
}

/// Soil fertility classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FertilityType {
    /// Barren soil
    Barren,
    /// Moderately fertile soil
    SlightlyFertile,
    /// Fertile soil
    Fertile,
}

impl FertilityType {
    /// Resolve a raw catalog name (canonical or localized synonym)
    pub fn from_name(name: &str) -> CompositionResult<Self> {
        match normalize(name).as_str() {
            "barren" | "бедная почва" => Ok(FertilityType::Barren),
            "slightly_fertile" | "средне плодородная" => Ok(FertilityType::SlightlyFertile),
            "fertile" | "плодородная" => Ok(FertilityType::Fertile),
            _ => Err(unknown("FertilityType", name)),
        }
    }
}

impl fmt::Display for FertilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FertilityType::Barren => "BARREN",
            FertilityType::SlightlyFertile => "SLIGHTLY_FERTILE",
            FertilityType::Fertile => "FERTILE",
        };
        write!(f, "{name}")
    }
}

/// Site stressors a plant must resist, as opposed to preference categories
/// with interchangeable options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitationFactor {
    /// Soil overconsolidation
    Overconsolidation,
    /// Soil salinization
    Salinization,
    /// Drought
    Drought,
    /// Flooding
    Flooding,
    /// Gas pollution
    GasPollution,
    /// Strong winds
    Windiness,
}

impl LimitationFactor {
    /// All limitation factors, in declaration order
    pub const ALL: [LimitationFactor; 6] = [
        LimitationFactor::Overconsolidation,
        LimitationFactor::Salinization,
        LimitationFactor::Drought,
        LimitationFactor::Flooding,
        LimitationFactor::GasPollution,
        LimitationFactor::Windiness,
    ];

    /// Resolve a raw catalog name (canonical or localized synonym)
    pub fn from_name(name: &str) -> CompositionResult<Self> {
        match normalize(name).as_str() {
            "overconsolidation" | "устойчивость к переуплотнению" => {
                Ok(LimitationFactor::Overconsolidation)
            }
            "salinization" | "устойчивость к засолению" => {
                Ok(LimitationFactor::Salinization)
            }
            "drought" | "устойчивость к пересыханию" => Ok(LimitationFactor::Drought),
            "flooding" | "устойчивость к подтоплению" => Ok(LimitationFactor::Flooding),
            "gas_pollution" | "газостойкость" => Ok(LimitationFactor::GasPollution),
            "windiness" | "ветроустойчивость" => Ok(LimitationFactor::Windiness),
            _ => Err(unknown("LimitationFactor", name)),
        }
    }
}

impl fmt::Display for LimitationFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LimitationFactor::Overconsolidation => "OVERCONSOLIDATION",
            LimitationFactor::Salinization => "SALINIZATION",
            LimitationFactor::Drought => "DROUGHT",
            LimitationFactor::Flooding => "FLOODING",
            LimitationFactor::GasPollution => "GAS_POLLUTION",
            LimitationFactor::Windiness => "WINDINESS",
        };
        write!(f, "{name}")
    }
}

/// USDA climate hardiness zone, used as a single-valued site attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UsdaZone(u8);

impl UsdaZone {
    /// Construct from an integer in [1, 11]
    pub fn from_value(value: u8) -> CompositionResult<Self> {
        if (1..=11).contains(&value) {
            Ok(UsdaZone(value))
        } else {
            Err(CompositionError::InvalidValue {
                kind: "UsdaZone",
                value: value.to_string(),
            })
        }
    }

    /// Zone number in [1, 11]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for UsdaZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "USDA{}", self.0)
    }
}

/// Plant spread aggressiveness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggressivenessLevel {
    /// Suppressed by neighbors
    Suppressed,
    /// Neither spreads aggressively nor is suppressed
    #[default]
    Neutral,
    /// Spreads aggressively
    Aggressive,
}

impl AggressivenessLevel {
    /// Construct from an integer in [-1, 1]
    pub fn from_value(value: i8) -> CompositionResult<Self> {
        match value {
            -1 => Ok(AggressivenessLevel::Suppressed),
            0 => Ok(AggressivenessLevel::Neutral),
            1 => Ok(AggressivenessLevel::Aggressive),
            other => Err(CompositionError::InvalidValue {
                kind: "AggressivenessLevel",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AggressivenessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AggressivenessLevel::Suppressed => "SUPPRESSED",
            AggressivenessLevel::Neutral => "NEUTRAL",
            AggressivenessLevel::Aggressive => "AGGRESSIVE",
        };
        write!(f, "{name}")
    }
}

/// Plant survivability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurvivabilityLevel {
    /// Fragile
    Weak,
    /// Average survivability
    #[default]
    Normal,
    /// Hardy
    Strong,
}

impl SurvivabilityLevel {
    /// Construct from an integer in [-1, 1]
    pub fn from_value(value: i8) -> CompositionResult<Self> {
        match value {
            -1 => Ok(SurvivabilityLevel::Weak),
            0 => Ok(SurvivabilityLevel::Normal),
            1 => Ok(SurvivabilityLevel::Strong),
            other => Err(CompositionError::InvalidValue {
                kind: "SurvivabilityLevel",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SurvivabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SurvivabilityLevel::Weak => "WEAK",
            SurvivabilityLevel::Normal => "NORMAL",
            SurvivabilityLevel::Strong => "STRONG",
        };
        write!(f, "{name}")
    }
}

/// Plant life form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeForm {
    /// Tree
    Tree,
    /// Bush
    Bush,
    /// Ground cover
    GroundCover,
    /// Liana
    Liana,
    /// Perennial grass
    Perennial,
    /// Bulbous plant
    Bulbous,
    /// Annual plant
    Annual,
    /// Swamp plant
    SwampPlant,
}

impl LifeForm {
    /// Resolve a raw catalog name (canonical or localized synonym)
    pub fn from_name(name: &str) -> CompositionResult<Self> {
        match normalize(name).as_str() {
            "tree" | "дерево" => Ok(LifeForm::Tree),
            "bush" | "кустарник" => Ok(LifeForm::Bush),
            "ground_cover" | "почвопокровное" => Ok(LifeForm::GroundCover),
            "liana" | "лиана" => Ok(LifeForm::Liana),
            "perennial" | "многолетние травы" => Ok(LifeForm::Perennial),
            "bulbous" | "луковичные" => Ok(LifeForm::Bulbous),
            "annual" | "однолетники" => Ok(LifeForm::Annual),
            "swamp_plant" | "болотное растение" => Ok(LifeForm::SwampPlant),
            _ => Err(unknown("LifeForm", name)),
        }
    }
}

impl fmt::Display for LifeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifeForm::Tree => "TREE",
            LifeForm::Bush => "BUSH",
            LifeForm::GroundCover => "GROUND_COVER",
            LifeForm::Liana => "LIANA",
            LifeForm::Perennial => "PERENNIAL",
            LifeForm::Bulbous => "BULBOUS",
            LifeForm::Annual => "ANNUAL",
            LifeForm::SwampPlant => "SWAMP_PLANT",
        };
        write!(f, "{name}")
    }
}

/// Resolve a batch of raw names, collecting every failure instead of
/// stopping at the first one
pub fn parse_names<T>(
    names: &[&str],
    parse: impl Fn(&str) -> CompositionResult<T>,
) -> Result<Vec<T>, Vec<CompositionError>> {
    let mut parsed = Vec::with_capacity(names.len());
    let mut failures = Vec::new();
    for name in names {
        match parse(name) {
            Ok(value) => parsed.push(value),
            Err(err) => failures.push(err),
        }
    }
    if failures.is_empty() {
        Ok(parsed)
    } else {
        Err(failures)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn unknown(kind: &'static str, name: &str) -> CompositionError {
    CompositionError::UnknownFactorName {
        kind,
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_round_trip() {
        for value in [-1, 0, 1] {
            let tolerance = ToleranceType::from_value(value).unwrap();
            assert_eq!(tolerance.to_value(), value);
        }
        assert!(ToleranceType::from_value(2).is_err());
    }

    #[test]
    fn test_cohabitation_weights() {
        assert_eq!(CohabitationType::Negative.to_weight(), -1);
        assert_eq!(CohabitationType::Neutral.to_weight(), 0);
        assert_eq!(CohabitationType::Positive.to_weight(), 1);
    }

    #[test]
    fn test_acidity_from_ph() {
        assert_eq!(AcidityType::from_ph(2), AcidityType::StronglyAcidic);
        assert_eq!(AcidityType::from_ph(3), AcidityType::StronglyAcidic);
        assert_eq!(AcidityType::from_ph(4), AcidityType::Acidic);
        assert_eq!(AcidityType::from_ph(5), AcidityType::Acidic);
        assert_eq!(AcidityType::from_ph(6), AcidityType::SlightlyAcidic);
        assert_eq!(AcidityType::from_ph(7), AcidityType::Neutral);
        assert_eq!(AcidityType::from_ph(8), AcidityType::SlightlyAlkaline);
        assert_eq!(AcidityType::from_ph(9), AcidityType::Alkaline);
        assert_eq!(AcidityType::from_ph(10), AcidityType::Alkaline);
        assert_eq!(AcidityType::from_ph(11), AcidityType::StronglyAlkaline);
    }

    #[test]
    fn test_usda_zone_bounds() {
        assert!(UsdaZone::from_value(0).is_err());
        assert!(UsdaZone::from_value(12).is_err());
        let zone = UsdaZone::from_value(5).unwrap();
        assert_eq!(zone.value(), 5);
        assert_eq!(zone.to_string(), "USDA5");
    }

    #[test]
    fn test_synonym_resolution() {
        assert_eq!(LightType::from_name("Полное освещение").unwrap(), LightType::Light);
        assert_eq!(LightType::from_name("  light ").unwrap(), LightType::Light);
        assert_eq!(
            HumidityType::from_name("Влажность в воздухе").unwrap(),
            HumidityType::High
        );
        assert_eq!(SoilType::from_name("Тяжёлая").unwrap(), SoilType::Heavy);
        assert_eq!(
            LimitationFactor::from_name("Газостойкость").unwrap(),
            LimitationFactor::GasPollution
        );
        assert_eq!(LifeForm::from_name("Дерево").unwrap(), LifeForm::Tree);
    }

    #[test]
    fn test_unknown_name_fails_fast() {
        let err = SoilType::from_name("volcanic").unwrap_err();
        match err {
            CompositionError::UnknownFactorName { kind, name } => {
                assert_eq!(kind, "SoilType");
                assert_eq!(name, "volcanic");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_names_collects_failures() {
        let result = parse_names(&["Тень", "Полутень"], LightType::from_name);
        assert_eq!(result.unwrap(), vec![LightType::Dark, LightType::Darkened]);

        let failures = parse_names(&["Тень", "bogus", "also bogus"], LightType::from_name)
            .unwrap_err();
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let factors = vec![
            LimitationFactor::Drought,
            LimitationFactor::Flooding,
            LimitationFactor::Windiness,
        ];
        for factor in factors {
            let json = serde_json::to_string(&factor).unwrap();
            let back: LimitationFactor = serde_json::from_str(&json).unwrap();
            assert_eq!(factor, back);
        }

        let zone = UsdaZone::from_value(7).unwrap();
        let json = serde_json::to_string(&zone).unwrap();
        let back: UsdaZone = serde_json::from_str(&json).unwrap();
        assert_eq!(zone, back);
    }
}
