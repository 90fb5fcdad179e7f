//! Protview Core
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Best-effort metadata extraction from PDB and mmCIF structure files.
//!
//! # Overview
//!
//! - **Formats**: [`StructureFormat`] resolved from a tag, path or content
//! - **Documents**: [`StructureDocument`] loaded from bytes or disk
//! - **Extraction**: [`extract`] produces [`ProteinMetadata`], always with
//!   five fields; fields no rule can fill are [`FieldValue::Unavailable`]
//! - **Accessions**: [`detect_accession`] recovers a PDB ID from `HEADER`
//!
//! # Example
//!
//! ```
//! use protview_core::{extract, StructureDocument, StructureFormat};
//!
//! let doc = StructureDocument::new(
//!     "TITLE     LEGUME LECTIN COMPLEX\nEXPDTA    X-RAY DIFFRACTION\n",
//!     StructureFormat::Pdb,
//! );
//! let metadata = extract(&doc);
//!
//! assert_eq!(metadata.title().as_deref(), Some("LEGUME LECTIN COMPLEX"));
//! assert_eq!(metadata.method().as_deref(), Some("X-RAY DIFFRACTION"));
//! assert!(!metadata.organism().is_available());
//! ```

pub mod accession;
pub mod document;
pub mod extractor;
pub mod format;
pub mod metadata;
pub mod mmcif;
pub mod pdb;
pub mod rules;

// Re-export commonly used types
pub use accession::{detect_accession, AccessionCode};
pub use document::StructureDocument;
pub use extractor::{extract, extract_str};
pub use format::StructureFormat;
pub use metadata::{FieldValue, MetadataField, ProteinMetadata, UNAVAILABLE_LABEL};
pub use rules::Rule;
