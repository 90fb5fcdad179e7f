//! Metadata extraction
//!
//! [`extract`] turns a [`StructureDocument`] into [`ProteinMetadata`]. The
//! document format selects a rule table; each field walks its rules in
//! priority order and keeps the first hit. Nothing here fails: a field that
//! no rule can fill stays [`FieldValue::Unavailable`], and an unsupported
//! format yields metadata with every field unavailable.

use crate::document::StructureDocument;
use crate::format::StructureFormat;
use crate::metadata::{FieldValue, MetadataField, ProteinMetadata};
use crate::rules::Rule;
use tracing::{debug, trace};

/// Ordered rules for each field, indexed like [`MetadataField::ALL`]
pub type FieldRules = [&'static [Rule]; 5];

/// Value reported when `COMPND` mentions a protein without naming it
pub const GENERIC_MOLECULE: &str = "Protein";

pub const PDB_RULES: FieldRules = [
    // Title/Description
    &[Rule::RecordText { tag: "TITLE" }, Rule::RecordText { tag: "HEADER" }],
    // Molecule name
    &[
        Rule::LabeledSegment {
            tag: "COMPND",
            label: "MOLECULE:",
            stop_at_newline: false,
        },
        Rule::WordPresence {
            tag: "COMPND",
            word: "PROTEIN",
            value: GENERIC_MOLECULE,
        },
    ],
    // Classification/Keywords
    &[Rule::RecordText { tag: "KEYWDS" }],
    // Experimental method
    &[Rule::RecordText { tag: "EXPDTA" }],
    // Organism
    &[
        Rule::LabeledSegment {
            tag: "SOURCE",
            label: "ORGANISM_SCIENTIFIC:",
            stop_at_newline: true,
        },
        Rule::LabeledSegment {
            tag: "SOURCE",
            label: "ORGANISM:",
            stop_at_newline: true,
        },
        Rule::FirstToken {
            tag: "SOURCE",
            reject: "MOLECULE",
        },
    ],
];

pub const MMCIF_RULES: FieldRules = [
    &[Rule::CifItem { tag: "_struct.title" }],
    &[
        Rule::CifItem { tag: "_entity.pdbx_description" },
        Rule::CifLoopColumn { tag: "_entity.pdbx_description" },
    ],
    &[Rule::CifItem { tag: "_struct_keywords.pdbx_keywords" }],
    &[Rule::CifItem { tag: "_exptl.method" }],
    &[
        Rule::CifItem { tag: "_entity_src_nat.organism_scientific" },
        Rule::CifItem { tag: "_entity_src_gen.organism_scientific" },
        Rule::CifItem { tag: "_entity_src_nat.pdbx_organism_scientific" },
        Rule::CifItem { tag: "_entity_src_gen.pdbx_gene_src_scientific_name" },
        Rule::CifItem { tag: "_pdbx_entity_src_syn.organism_scientific" },
    ],
];

/// Rule table for a format, `None` when the format is unsupported
pub fn rules_for(format: StructureFormat) -> Option<&'static FieldRules> {
    match format {
        StructureFormat::Pdb => Some(&PDB_RULES),
        StructureFormat::Mmcif => Some(&MMCIF_RULES),
        StructureFormat::Unsupported => None,
    }
}

/// Extract the five metadata fields of a document
#[tracing::instrument(level = "debug", skip_all, fields(format = %document.format()))]
pub fn extract(document: &StructureDocument) -> ProteinMetadata {
    extract_str(document.text(), document.format())
}

/// Extract from raw text with an explicit format
pub fn extract_str(text: &str, format: StructureFormat) -> ProteinMetadata {
    let mut metadata = ProteinMetadata::unavailable();

    let Some(table) = rules_for(format) else {
        debug!(%format, "Unsupported format, no fields extracted");
        return metadata;
    };

    for field in MetadataField::ALL {
        metadata.set(field, apply_rules(field, table[field.index()], text));
    }

    metadata
}

/// First non-blank result of `rules`, in order
pub fn apply_rules(field: MetadataField, rules: &[Rule], text: &str) -> FieldValue {
    for rule in rules {
        match rule.apply(text).map(FieldValue::from_text) {
            Some(value @ FieldValue::Extracted(_)) => {
                debug!(%field, rule = rule.name(), tag = rule.tag(), "Field extracted");
                return value;
            },
            _ => trace!(%field, rule = rule.name(), tag = rule.tag(), "Rule found nothing"),
        }
    }

    FieldValue::Unavailable
}
