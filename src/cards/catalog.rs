//! Icon catalog: the pool of card faces.
//!
//! The engine never touches visual assets. A card face is an [`IconKey`] -
//! a symbolic name a presentation layer resolves to whatever it renders.
//! The catalog is the ordered pool the deck generator draws from.

use serde::{Deserialize, Serialize};

/// Symbolic reference to a card face icon.
///
/// Resolved to a visual asset outside the engine. Compared by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconKey(String);

impl IconKey {
    /// Create an icon key.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the icon name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for IconKey {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// The standard card faces. 25 entries, bounding the largest pair option.
const STANDARD_ICONS: [&str; 25] = [
    "anchor", "bell", "bike", "camera", "cloud", "crown", "feather", "fish",
    "flame", "flower", "gamepad", "ghost", "gift", "guitar", "heart", "key",
    "leaf", "moon", "music", "rocket", "snowflake", "star", "sun", "umbrella",
    "zap",
];

/// Substitute face for pairs beyond the catalog size.
const FALLBACK_ICON: &str = "help-circle";

/// An ordered pool of distinct card face icons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconCatalog {
    icons: Vec<IconKey>,
}

impl IconCatalog {
    /// The standard 25-icon catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_names(STANDARD_ICONS)
    }

    /// Build a catalog from an ordered list of icon names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            icons: names.into_iter().map(IconKey::new).collect(),
        }
    }

    /// Number of distinct icons available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// True when the catalog holds no icons at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Get an icon by catalog position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&IconKey> {
        self.icons.get(index)
    }

    /// The substitute face used once the catalog is exhausted.
    #[must_use]
    pub fn fallback(&self) -> IconKey {
        IconKey::new(FALLBACK_ICON)
    }

    /// Iterate over all icons in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &IconKey> {
        self.icons.iter()
    }
}

impl Default for IconCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_size() {
        // The largest pair option must be coverable without fallback
        let catalog = IconCatalog::standard();
        assert_eq!(catalog.len(), 25);
    }

    #[test]
    fn test_standard_catalog_distinct() {
        let catalog = IconCatalog::standard();
        let mut names: Vec<_> = catalog.iter().map(IconKey::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_fallback_not_in_standard_catalog() {
        let catalog = IconCatalog::standard();
        let fallback = catalog.fallback();
        assert!(catalog.iter().all(|icon| *icon != fallback));
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = IconCatalog::from_names(["cat", "dog"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0), Some(&IconKey::new("cat")));
        assert_eq!(catalog.get(2), None);
    }

    #[test]
    fn test_icon_key_display() {
        assert_eq!(format!("{}", IconKey::new("star")), "star");
    }

    #[test]
    fn test_catalog_serialization() {
        let catalog = IconCatalog::from_names(["cat", "dog"]);
        let json = serde_json::to_string(&catalog).unwrap();
        let deserialized: IconCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog, deserialized);
    }
}
