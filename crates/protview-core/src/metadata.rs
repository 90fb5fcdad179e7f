//! Protein metadata produced by extraction
//!
//! [`ProteinMetadata`] always carries exactly five fields in a fixed order.
//! A field that could not be extracted holds [`FieldValue::Unavailable`]
//! instead of being omitted.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Text shown in place of an unavailable field
pub const UNAVAILABLE_LABEL: &str = "Not available";

/// One of the five descriptive fields, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetadataField {
    Title,
    Molecule,
    Keywords,
    Method,
    Organism,
}

impl MetadataField {
    /// All fields in their fixed output order
    pub const ALL: [MetadataField; 5] = [
        MetadataField::Title,
        MetadataField::Molecule,
        MetadataField::Keywords,
        MetadataField::Method,
        MetadataField::Organism,
    ];

    /// Position of the field within [`MetadataField::ALL`]
    pub fn index(self) -> usize {
        match self {
            MetadataField::Title => 0,
            MetadataField::Molecule => 1,
            MetadataField::Keywords => 2,
            MetadataField::Method => 3,
            MetadataField::Organism => 4,
        }
    }

    /// Machine-readable key used in JSON output
    pub fn key(self) -> &'static str {
        match self {
            MetadataField::Title => "title",
            MetadataField::Molecule => "molecule",
            MetadataField::Keywords => "keywords",
            MetadataField::Method => "method",
            MetadataField::Organism => "organism",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            MetadataField::Title => "Title/Description",
            MetadataField::Molecule => "Molecule name",
            MetadataField::Keywords => "Classification/Keywords",
            MetadataField::Method => "Experimental method",
            MetadataField::Organism => "Organism",
        }
    }
}

impl std::fmt::Display for MetadataField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Value of a single metadata field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FieldValue {
    /// Trimmed, non-empty extracted text
    Extracted(String),
    /// Sentinel for a field no rule could extract
    #[default]
    Unavailable,
}

impl FieldValue {
    /// Build a value from raw text; blank text becomes `Unavailable`
    pub fn from_text(text: impl AsRef<str>) -> Self {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            FieldValue::Unavailable
        } else {
            FieldValue::Extracted(trimmed.to_string())
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            FieldValue::Extracted(s) => Some(s),
            FieldValue::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, FieldValue::Extracted(_))
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_deref().unwrap_or(UNAVAILABLE_LABEL))
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Extracted(s) => serializer.serialize_str(s),
            FieldValue::Unavailable => serializer.serialize_none(),
        }
    }
}

/// The five descriptive fields of a structure
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProteinMetadata {
    values: [FieldValue; 5],
}

impl ProteinMetadata {
    /// Metadata with every field unavailable
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn get(&self, field: MetadataField) -> &FieldValue {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: MetadataField, value: FieldValue) {
        self.values[field.index()] = value;
    }

    /// Fields and values in fixed output order
    pub fn iter(&self) -> impl Iterator<Item = (MetadataField, &FieldValue)> {
        MetadataField::ALL.into_iter().zip(self.values.iter())
    }

    /// Always five
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of fields holding extracted text
    pub fn available_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_available()).count()
    }

    pub fn title(&self) -> &FieldValue {
        self.get(MetadataField::Title)
    }

    pub fn molecule(&self) -> &FieldValue {
        self.get(MetadataField::Molecule)
    }

    pub fn keywords(&self) -> &FieldValue {
        self.get(MetadataField::Keywords)
    }

    pub fn method(&self) -> &FieldValue {
        self.get(MetadataField::Method)
    }

    pub fn organism(&self) -> &FieldValue {
        self.get(MetadataField::Organism)
    }
}

impl Serialize for ProteinMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}
