//! Static Feature Analyzer
//!
//! Placeholder analyzer returning a fixed descriptive label for every feature
//! category. Real image analysis would replace the per-category functions
//! below; the async signatures already match that use.

use super::FeatureAnalyzer;
use crate::types::FeatureCategory;
use async_trait::async_trait;

/// Analyzer with a fixed, fully populated output
#[derive(Debug, Clone, Default)]
pub struct StaticFeatureAnalyzer;

impl StaticFeatureAnalyzer {
    pub fn new() -> Self {
        Self
    }

    // General habit

    async fn growth_form(&self, _image: &[u8]) -> String {
        "Herbaceous perennial".to_string()
    }

    async fn root_system(&self, _image: &[u8]) -> String {
        "Fibrous root system".to_string()
    }

    async fn stem_structure(&self, _image: &[u8]) -> String {
        "Erect, branching".to_string()
    }

    async fn stem_cross_section(&self, _image: &[u8]) -> String {
        "Circular".to_string()
    }

    async fn surface_texture(&self, _image: &[u8]) -> String {
        "Smooth, glabrous".to_string()
    }

    async fn development_type(&self, _image: &[u8]) -> String {
        "Upright branching".to_string()
    }

    async fn fibrous_structures(&self, _image: &[u8]) -> String {
        "Hairless stems".to_string()
    }

    // Leaf and bud

    async fn leaf_arrangement(&self, _image: &[u8]) -> String {
        "Alternate".to_string()
    }

    async fn leaf_type(&self, _image: &[u8]) -> String {
        "Simple".to_string()
    }

    async fn leaf_margin(&self, _image: &[u8]) -> String {
        "Entire".to_string()
    }

    async fn leaf_surface(&self, _image: &[u8]) -> String {
        "Glabrous".to_string()
    }

    async fn venation(&self, _image: &[u8]) -> String {
        "Pinnate".to_string()
    }

    async fn leaf_base_and_apex(&self, _image: &[u8]) -> String {
        "Petiolate".to_string()
    }

    async fn bud_type_and_position(&self, _image: &[u8]) -> String {
        "Axillary buds".to_string()
    }

    // Root and stem

    async fn bark_texture(&self, _image: &[u8]) -> String {
        "Smooth".to_string()
    }

    async fn trunk_proportions(&self, _image: &[u8]) -> String {
        "Slender".to_string()
    }

    async fn branch_arrangement(&self, _image: &[u8]) -> String {
        "Alternate".to_string()
    }

    async fn root_type_dimensions(&self, _image: &[u8]) -> String {
        "Fibrous".to_string()
    }

    // Flower

    async fn inflorescence_type(&self, _image: &[u8]) -> String {
        "Solitary".to_string()
    }

    async fn flower_color_and_symmetry(&self, _image: &[u8]) -> String {
        "Radial symmetry".to_string()
    }

    async fn flower_organ_dimensions(&self, _image: &[u8]) -> String {
        "Standard proportions".to_string()
    }

    async fn fragrance(&self, _image: &[u8]) -> String {
        "Mild fragrance".to_string()
    }

    async fn blooming_time(&self, _image: &[u8]) -> String {
        "Spring to summer".to_string()
    }

    // Fruit and seed

    async fn fruit_type(&self, _image: &[u8]) -> String {
        "Capsule".to_string()
    }

    async fn fruit_characteristics(&self, _image: &[u8]) -> String {
        "Smooth surface".to_string()
    }

    async fn fruit_dehiscence(&self, _image: &[u8]) -> String {
        "Dehiscent".to_string()
    }

    async fn seed_surface(&self, _image: &[u8]) -> String {
        "Smooth".to_string()
    }

    // Phenology and ecology

    async fn phenological_traits(&self, _image: &[u8]) -> String {
        "Deciduous".to_string()
    }

    async fn growth_environment(&self, _image: &[u8]) -> String {
        "Temperate regions".to_string()
    }

    async fn geographic_distribution(&self, _image: &[u8]) -> String {
        "Widespread".to_string()
    }

    async fn species_adaptations(&self, _image: &[u8]) -> String {
        "Drought tolerant".to_string()
    }
}

#[async_trait]
impl FeatureAnalyzer for StaticFeatureAnalyzer {
    fn name(&self) -> &'static str {
        "Static"
    }

    async fn analyze_category(&self, category: FeatureCategory, image: &[u8]) -> String {
        use FeatureCategory::*;
        match category {
            GrowthForm => self.growth_form(image).await,
            RootSystem => self.root_system(image).await,
            StemStructure => self.stem_structure(image).await,
            StemCrossSection => self.stem_cross_section(image).await,
            SurfaceTexture => self.surface_texture(image).await,
            DevelopmentType => self.development_type(image).await,
            FibrousStructures => self.fibrous_structures(image).await,
            LeafArrangement => self.leaf_arrangement(image).await,
            LeafType => self.leaf_type(image).await,
            LeafMargin => self.leaf_margin(image).await,
            LeafSurface => self.leaf_surface(image).await,
            Venation => self.venation(image).await,
            LeafBaseAndApex => self.leaf_base_and_apex(image).await,
            BudTypeAndPosition => self.bud_type_and_position(image).await,
            BarkTexture => self.bark_texture(image).await,
            TrunkProportions => self.trunk_proportions(image).await,
            BranchArrangement => self.branch_arrangement(image).await,
            RootTypeDimensions => self.root_type_dimensions(image).await,
            InflorescenceType => self.inflorescence_type(image).await,
            FlowerColorAndSymmetry => self.flower_color_and_symmetry(image).await,
            FlowerOrganDimensions => self.flower_organ_dimensions(image).await,
            Fragrance => self.fragrance(image).await,
            BloomingTime => self.blooming_time(image).await,
            FruitType => self.fruit_type(image).await,
            FruitCharacteristics => self.fruit_characteristics(image).await,
            FruitDehiscence => self.fruit_dehiscence(image).await,
            SeedSurface => self.seed_surface(image).await,
            PhenologicalTraits => self.phenological_traits(image).await,
            GrowthEnvironment => self.growth_environment(image).await,
            GeographicDistribution => self.geographic_distribution(image).await,
            SpeciesAdaptations => self.species_adaptations(image).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::feature_confidence;

    #[tokio::test]
    async fn test_populates_every_category() {
        let record = StaticFeatureAnalyzer::new().analyze(&[0u8; 16]).await;

        assert_eq!(record.analyzed_count(), FeatureCategory::COUNT);
        assert!((feature_confidence(&record) - 100.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_known_labels() {
        let analyzer = StaticFeatureAnalyzer::new();

        assert_eq!(
            analyzer.analyze_category(FeatureCategory::GrowthForm, &[]).await,
            "Herbaceous perennial"
        );
        assert_eq!(
            analyzer.analyze_category(FeatureCategory::SpeciesAdaptations, &[]).await,
            "Drought tolerant"
        );
    }
}
