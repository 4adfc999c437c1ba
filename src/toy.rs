//! Builder pattern: action figures assembled part by part.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use serde::Deserialize;
use tracing::debug;

// ============================================================================
// Blueprint
// ============================================================================

/// Part name to description. Setting an existing part replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blueprint {
    parts: BTreeMap<String, String>,
}

impl Blueprint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modify(&mut self, part: impl Into<String>, description: impl Into<String>) {
        self.parts.insert(part.into(), description.into());
    }

    pub fn get(&self, part: &str) -> Option<&str> {
        self.parts.get(part).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (part, description)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{part}': '{description}'")?;
        }
        write!(f, "}}")
    }
}

// ============================================================================
// Builder
// ============================================================================

pub trait ToyBuilder {
    type Product;

    fn add_part(&mut self, part: impl Into<String>, description: impl Into<String>) -> &mut Self;

    fn add_hair(&mut self, description: impl Into<String>) -> &mut Self {
        self.add_part("Hair", description)
    }

    fn add_clothes(&mut self, description: impl Into<String>) -> &mut Self {
        self.add_part("Clothes", description)
    }

    fn add_shoes(&mut self, description: impl Into<String>) -> &mut Self {
        self.add_part("Shoes", description)
    }

    /// Hands over everything added so far and starts over with nothing.
    fn build(&mut self) -> Self::Product;

    fn reset(&mut self);
}

#[derive(Debug, Default)]
pub struct ActionFigureBuilder {
    blueprint: Blueprint,
}

impl ActionFigureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parts accumulated since the last build.
    pub fn pending(&self) -> &Blueprint {
        &self.blueprint
    }
}

impl ToyBuilder for ActionFigureBuilder {
    type Product = ActionFigure;

    fn add_part(&mut self, part: impl Into<String>, description: impl Into<String>) -> &mut Self {
        self.blueprint.modify(part, description);
        self
    }

    fn build(&mut self) -> ActionFigure {
        let finished = std::mem::take(&mut self.blueprint);
        debug!(parts = finished.len(), "action figure built, builder reset");
        ActionFigure::new(finished)
    }

    fn reset(&mut self) {
        self.blueprint = Blueprint::new();
    }
}

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionFigure {
    blueprint: Blueprint,
}

impl ActionFigure {
    fn new(blueprint: Blueprint) -> Self {
        Self { blueprint }
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    pub fn describe(&self) -> String {
        format!("ActionFigure: {}", self.blueprint)
    }
}

// ============================================================================
// Configurations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToyConfig {
    pub hair: String,
    pub clothes: String,
    pub shoes: String,
}

impl ToyConfig {
    pub fn new(hair: impl Into<String>, clothes: impl Into<String>, shoes: impl Into<String>) -> Self {
        Self {
            hair: hair.into(),
            clothes: clothes.into(),
            shoes: shoes.into(),
        }
    }

    pub fn apply<'b, B: ToyBuilder>(&self, builder: &'b mut B) -> &'b mut B {
        builder
            .add_hair(self.hair.as_str())
            .add_clothes(self.clothes.as_str())
            .add_shoes(self.shoes.as_str())
    }
}

pub fn make_a_toy(config: &ToyConfig) -> String {
    let mut builder = ActionFigureBuilder::new();
    config.apply(&mut builder).build().describe()
}

/// A named toy configuration. Catalogs keep their entries in demo order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(flatten)]
    pub toy: ToyConfig,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, toy: ToyConfig) -> Self {
        Self {
            name: name.into(),
            toy,
        }
    }
}

pub fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("superman", ToyConfig::new("Short Brown", "Superman Outfit", "None")),
        CatalogEntry::new("batman", ToyConfig::new("Short Black", "Batman Outfit", "Black Boots")),
        CatalogEntry::new(
            "wonderwoman",
            ToyConfig::new("Long Black", "Wonder Woman Outfit", "Brown Leather Boots"),
        ),
    ]
}

/// Builds every toy in `catalog` with one reused builder and prints each
/// description.
pub fn showcase<W: Write>(catalog: &[CatalogEntry], out: &mut W) -> std::io::Result<Vec<ActionFigure>> {
    let mut builder = ActionFigureBuilder::new();
    let mut figures = Vec::with_capacity(catalog.len());

    for entry in catalog {
        let figure = entry.toy.apply(&mut builder).build();
        writeln!(out, "{}: {}", entry.name, figure.describe())?;
        figures.push(figure);
    }

    Ok(figures)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_superman_description() {
        let config = ToyConfig::new("Short Brown", "Superman Outfit", "None");
        let description = make_a_toy(&config);

        assert!(description.starts_with("ActionFigure: "));
        assert!(description.contains("'Hair': 'Short Brown'"));
        assert!(description.contains("'Clothes': 'Superman Outfit'"));
        assert!(description.contains("'Shoes': 'None'"));
    }

    #[test]
    fn test_build_contains_exactly_added_parts() {
        let mut builder = ActionFigureBuilder::new();
        let figure = builder
            .add_hair("Short Brown")
            .add_clothes("Superman Outfit")
            .add_shoes("None")
            .build();

        let parts: Vec<_> = figure.blueprint().iter().collect();
        assert_eq!(
            parts,
            vec![
                ("Clothes", "Superman Outfit"),
                ("Hair", "Short Brown"),
                ("Shoes", "None"),
            ]
        );
    }

    #[test]
    fn test_build_resets_builder() {
        let mut builder = ActionFigureBuilder::new();
        builder.add_hair("Long Black").add_shoes("Boots");
        let first = builder.build();

        assert!(builder.pending().is_empty());
        let second = builder.build();
        assert_eq!(first.blueprint().len(), 2);
        assert!(second.blueprint().is_empty());
        assert_eq!(second.describe(), "ActionFigure: {}");
    }

    #[test]
    fn test_overwrite_replaces_description() {
        let mut builder = ActionFigureBuilder::new();
        let figure = builder.add_hair("Short").add_hair("Long").build();
        assert_eq!(figure.blueprint().get("Hair"), Some("Long"));
        assert_eq!(figure.blueprint().len(), 1);
    }

    #[test]
    fn test_custom_parts_accepted() {
        let mut builder = ActionFigureBuilder::new();
        let figure = builder.add_part("Cape", "Red").add_part("", "").build();
        assert_eq!(figure.blueprint().get("Cape"), Some("Red"));
        assert_eq!(figure.blueprint().get(""), Some(""));
    }

    #[test]
    fn test_reset_discards_pending_parts() {
        let mut builder = ActionFigureBuilder::new();
        builder.add_clothes("Batman Outfit");
        builder.reset();
        assert!(builder.build().blueprint().is_empty());
    }

    #[test]
    fn test_blueprint_display() {
        let mut blueprint = Blueprint::new();
        blueprint.modify("Shoes", "None");
        blueprint.modify("Hair", "Short Brown");
        assert_eq!(blueprint.to_string(), "{'Hair': 'Short Brown', 'Shoes': 'None'}");
    }

    #[test]
    fn test_default_catalog() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[1].name, "batman");
        assert_eq!(catalog[1].toy.shoes, "Black Boots");
    }

    #[test]
    fn test_showcase_keeps_catalog_order() {
        let mut out = Vec::new();
        showcase(&default_catalog(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let names: Vec<_> = text
            .lines()
            .filter_map(|line| line.split(':').next())
            .collect();
        assert_eq!(names, vec!["superman", "batman", "wonderwoman"]);
    }

    #[test]
    fn test_showcase_does_not_leak_between_builds() {
        let catalog = vec![
            CatalogEntry::new("a", ToyConfig::new("A hair", "A clothes", "A shoes")),
            CatalogEntry::new("b", ToyConfig::new("B hair", "B clothes", "B shoes")),
        ];

        let mut out = Vec::new();
        let figures = showcase(&catalog, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(figures.len(), 2);
        assert_eq!(figures[1].blueprint().get("Hair"), Some("B hair"));
        assert!(!figures[1].describe().contains("A "));
        assert!(text.contains("a: ActionFigure:"));
    }

    proptest! {
        #[test]
        fn prop_next_build_starts_empty(
            parts in prop::collection::btree_map("[A-Za-z]{1,8}", ".*", 0..6)
        ) {
            let mut builder = ActionFigureBuilder::new();
            for (part, description) in &parts {
                builder.add_part(part.as_str(), description.as_str());
            }
            let figure = builder.build();
            prop_assert_eq!(figure.blueprint().len(), parts.len());
            prop_assert!(builder.build().blueprint().is_empty());
        }
    }
}
