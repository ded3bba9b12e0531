//! Core Types for PlantID-AI
//!
//! Defines the data flowing through the identification workflow:
//! - **FeatureCategory / FeatureGroup:** fixed botanical descriptor set
//! - **FeatureRecord:** per-image descriptor labels
//! - **MethodKind:** the five identification methods
//! - **IdentificationResult:** per-method or merged identification

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Feature categories
// ============================================================================

/// Thematic grouping of feature categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureGroup {
    /// General habit (applies to all plant groups)
    GeneralHabit,
    /// Leaf and bud characteristics
    LeafAndBud,
    /// Root and trunk characteristics
    RootAndStem,
    /// Flower and flowering characteristics
    Flower,
    /// Fruit and seed characteristics
    FruitAndSeed,
    /// Phenology and ecology
    PhenologyAndEcology,
}

/// Botanical feature category
///
/// Declaration order is the record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCategory {
    // General habit
    GrowthForm,
    RootSystem,
    StemStructure,
    StemCrossSection,
    SurfaceTexture,
    DevelopmentType,
    FibrousStructures,

    // Leaf and bud
    LeafArrangement,
    LeafType,
    LeafMargin,
    LeafSurface,
    Venation,
    LeafBaseAndApex,
    BudTypeAndPosition,

    // Root and stem
    BarkTexture,
    TrunkProportions,
    BranchArrangement,
    RootTypeDimensions,

    // Flower
    InflorescenceType,
    FlowerColorAndSymmetry,
    FlowerOrganDimensions,
    Fragrance,
    BloomingTime,

    // Fruit and seed
    FruitType,
    FruitCharacteristics,
    FruitDehiscence,
    SeedSurface,

    // Phenology and ecology
    PhenologicalTraits,
    GrowthEnvironment,
    GeographicDistribution,
    SpeciesAdaptations,
}

impl FeatureCategory {
    /// Every category, in record order
    pub const ALL: [FeatureCategory; 31] = [
        FeatureCategory::GrowthForm,
        FeatureCategory::RootSystem,
        FeatureCategory::StemStructure,
        FeatureCategory::StemCrossSection,
        FeatureCategory::SurfaceTexture,
        FeatureCategory::DevelopmentType,
        FeatureCategory::FibrousStructures,
        FeatureCategory::LeafArrangement,
        FeatureCategory::LeafType,
        FeatureCategory::LeafMargin,
        FeatureCategory::LeafSurface,
        FeatureCategory::Venation,
        FeatureCategory::LeafBaseAndApex,
        FeatureCategory::BudTypeAndPosition,
        FeatureCategory::BarkTexture,
        FeatureCategory::TrunkProportions,
        FeatureCategory::BranchArrangement,
        FeatureCategory::RootTypeDimensions,
        FeatureCategory::InflorescenceType,
        FeatureCategory::FlowerColorAndSymmetry,
        FeatureCategory::FlowerOrganDimensions,
        FeatureCategory::Fragrance,
        FeatureCategory::BloomingTime,
        FeatureCategory::FruitType,
        FeatureCategory::FruitCharacteristics,
        FeatureCategory::FruitDehiscence,
        FeatureCategory::SeedSurface,
        FeatureCategory::PhenologicalTraits,
        FeatureCategory::GrowthEnvironment,
        FeatureCategory::GeographicDistribution,
        FeatureCategory::SpeciesAdaptations,
    ];

    /// Number of categories in a complete record
    pub const COUNT: usize = Self::ALL.len();

    /// Thematic group this category belongs to
    pub fn group(&self) -> FeatureGroup {
        use FeatureCategory::*;
        match self {
            GrowthForm | RootSystem | StemStructure | StemCrossSection | SurfaceTexture
            | DevelopmentType | FibrousStructures => FeatureGroup::GeneralHabit,
            LeafArrangement | LeafType | LeafMargin | LeafSurface | Venation
            | LeafBaseAndApex | BudTypeAndPosition => FeatureGroup::LeafAndBud,
            BarkTexture | TrunkProportions | BranchArrangement | RootTypeDimensions => {
                FeatureGroup::RootAndStem
            }
            InflorescenceType | FlowerColorAndSymmetry | FlowerOrganDimensions | Fragrance
            | BloomingTime => FeatureGroup::Flower,
            FruitType | FruitCharacteristics | FruitDehiscence | SeedSurface => {
                FeatureGroup::FruitAndSeed
            }
            PhenologicalTraits | GrowthEnvironment | GeographicDistribution
            | SpeciesAdaptations => FeatureGroup::PhenologyAndEcology,
        }
    }
}

// ============================================================================
// Feature record
// ============================================================================

/// Ordered mapping from feature category to descriptive label
///
/// A category counts as analyzed only when its label is non-empty; empty
/// labels are never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<FeatureCategory, String>",
    into = "BTreeMap<FeatureCategory, String>"
)]
pub struct FeatureRecord {
    labels: BTreeMap<FeatureCategory, String>,
}

impl FeatureRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label for a category (empty label clears it)
    pub fn set(&mut self, category: FeatureCategory, label: impl Into<String>) {
        let label = label.into();
        if label.is_empty() {
            self.labels.remove(&category);
        } else {
            self.labels.insert(category, label);
        }
    }

    /// Label for a category, if analyzed
    pub fn get(&self, category: FeatureCategory) -> Option<&str> {
        self.labels.get(&category).map(String::as_str)
    }

    /// Whether the category carries a non-empty label
    pub fn is_analyzed(&self, category: FeatureCategory) -> bool {
        self.labels.contains_key(&category)
    }

    /// Number of analyzed categories
    pub fn analyzed_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Analyzed categories and their labels, in record order
    pub fn iter(&self) -> impl Iterator<Item = (FeatureCategory, &str)> {
        self.labels.iter().map(|(c, l)| (*c, l.as_str()))
    }
}

impl From<BTreeMap<FeatureCategory, String>> for FeatureRecord {
    fn from(labels: BTreeMap<FeatureCategory, String>) -> Self {
        let mut record = FeatureRecord::new();
        for (category, label) in labels {
            record.set(category, label);
        }
        record
    }
}

impl From<FeatureRecord> for BTreeMap<FeatureCategory, String> {
    fn from(record: FeatureRecord) -> Self {
        record.labels
    }
}

// ============================================================================
// Identification methods
// ============================================================================

/// One identification method: a fixed request configuration paired with a
/// confidence adjustment rule
///
/// Serializes as the human-readable method tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum MethodKind {
    Basic,
    DetailedFeature,
    Morphological,
    Ecological,
    Seasonal,
}

impl MethodKind {
    /// All methods, in per-attempt execution order
    pub const ALL: [MethodKind; 5] = [
        MethodKind::Basic,
        MethodKind::DetailedFeature,
        MethodKind::Morphological,
        MethodKind::Ecological,
        MethodKind::Seasonal,
    ];

    /// Method tag recorded in `authentication_methods`
    pub fn tag(&self) -> &'static str {
        match self {
            MethodKind::Basic => "Basic plant identification",
            MethodKind::DetailedFeature => {
                "Detailed feature analysis with comprehensive plant characteristics"
            }
            MethodKind::Morphological => "Morphological analysis",
            MethodKind::Ecological => "Ecological context analysis",
            MethodKind::Seasonal => "Seasonal and phenological analysis",
        }
    }

    /// Flat confidence boost added to the base confidence
    ///
    /// DetailedFeature has no flat boost; its boost depends on the feature record.
    pub fn flat_boost(&self) -> f64 {
        match self {
            MethodKind::Basic | MethodKind::DetailedFeature => 0.0,
            MethodKind::Morphological => 5.0,
            MethodKind::Ecological => 3.0,
            MethodKind::Seasonal => 2.0,
        }
    }
}

impl From<MethodKind> for &'static str {
    fn from(method: MethodKind) -> Self {
        method.tag()
    }
}

impl TryFrom<String> for MethodKind {
    type Error = String;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        MethodKind::ALL
            .into_iter()
            .find(|method| method.tag() == tag)
            .ok_or_else(|| format!("unknown identification method: {}", tag))
    }
}

impl std::fmt::Display for MethodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// Identification result
// ============================================================================

/// Identification produced by one method invocation or by merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentificationResult {
    /// Candidate species name
    pub name: String,

    /// Confidence (0-100, not clamped; boosts may push it past 100)
    pub confidence: f64,

    /// Reference image URL from the recognition service
    pub description: Option<String>,

    /// Feature descriptors, when a feature analysis contributed
    pub features: Option<FeatureRecord>,

    /// Methods that contributed to this result
    pub authentication_methods: Vec<MethodKind>,

    /// Human-readable final confidence, e.g. "96.4% (after 2 attempts)"
    pub confidence_summary: Option<String>,
}
