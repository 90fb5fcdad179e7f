//! Extraction rules
//!
//! Each field is extracted by an ordered list of independent rules. The
//! first rule that yields non-blank text wins. Rules are plain data so the
//! per-format tables in [`crate::extractor`] can be `const`.

use crate::{mmcif, pdb};

/// A single extraction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Free text of all lines with a PDB record tag, joined by spaces
    RecordText { tag: &'static str },

    /// Value after a label inside concatenated PDB record text
    ///
    /// With `stop_at_newline` the record lines are joined by newlines and a
    /// newline ends the value as well as `;`.
    LabeledSegment {
        tag: &'static str,
        label: &'static str,
        stop_at_newline: bool,
    },

    /// Fixed `value` when `word` appears anywhere in the record text
    WordPresence {
        tag: &'static str,
        word: &'static str,
        value: &'static str,
    },

    /// First `;`-delimited token of the first record line, unless it
    /// contains the word `reject` or is a `KEY: value` specification such as
    /// `MOL_ID: 1`
    FirstToken {
        tag: &'static str,
        reject: &'static str,
    },

    /// mmCIF data item, fenced or single-line
    CifItem { tag: &'static str },

    /// Distinct values of an mmCIF `loop_` column, joined by `, `
    CifLoopColumn { tag: &'static str },
}

impl Rule {
    /// Short strategy name for log output
    pub fn name(&self) -> &'static str {
        match self {
            Rule::RecordText { .. } => "record-text",
            Rule::LabeledSegment { .. } => "labeled-segment",
            Rule::WordPresence { .. } => "word-presence",
            Rule::FirstToken { .. } => "first-token",
            Rule::CifItem { .. } => "cif-item",
            Rule::CifLoopColumn { .. } => "cif-loop-column",
        }
    }

    /// Record tag or data item the rule reads
    pub fn tag(&self) -> &'static str {
        match *self {
            Rule::RecordText { tag }
            | Rule::LabeledSegment { tag, .. }
            | Rule::WordPresence { tag, .. }
            | Rule::FirstToken { tag, .. }
            | Rule::CifItem { tag }
            | Rule::CifLoopColumn { tag } => tag,
        }
    }

    /// Run the rule against document text
    pub fn apply(&self, text: &str) -> Option<String> {
        let value = match *self {
            Rule::RecordText { tag } => pdb::record_text(text, tag, " "),

            Rule::LabeledSegment {
                tag,
                label,
                stop_at_newline,
            } => {
                let (separator, terminators): (&str, &[char]) = if stop_at_newline {
                    ("\n", &[';', '\n'][..])
                } else {
                    (" ", &[';'][..])
                };
                let record = pdb::record_text(text, tag, separator)?;
                pdb::labeled_segment(&record, label, terminators).map(str::to_string)
            },

            Rule::WordPresence { tag, word, value } => {
                let record = pdb::record_text(text, tag, " ")?;
                pdb::contains_word(&record, word).then(|| value.to_string())
            },

            Rule::FirstToken { tag, reject } => {
                let first = pdb::first_record(text, tag)?;
                let token = first.split(';').next().unwrap_or_default().trim();
                let is_label = token.contains(':') || pdb::contains_word(token, reject);
                (!is_label).then(|| token.to_string())
            },

            Rule::CifItem { tag } => mmcif::get_value(text, tag),

            Rule::CifLoopColumn { tag } => {
                let mut distinct: Vec<String> = Vec::new();
                for value in mmcif::loop_column(text, tag) {
                    if !distinct.contains(&value) {
                        distinct.push(value);
                    }
                }
                (!distinct.is_empty()).then(|| distinct.join(", "))
            },
        }?;

        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}
