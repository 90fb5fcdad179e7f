// Metadata extraction tests over PDB and mmCIF text

use proptest::prelude::*;
use protview_core::{
    detect_accession, extract, extract_str, FieldValue, MetadataField, ProteinMetadata,
    StructureDocument, StructureFormat,
};
use std::path::Path;

const SCENARIO_PDB: &str = "\
HEADER    OXYGEN TRANSPORT                       07-AUG-87   1FAT
TITLE     LEGUME LECTIN COMPLEX
COMPND    MOL_ID: 1; MOLECULE: LECTIN;
KEYWDS    LECTIN, SUGAR-BINDING PROTEIN
EXPDTA    X-RAY DIFFRACTION
SOURCE    MOL_ID: 1; ORGANISM_SCIENTIFIC: PHASEOLUS VULGARIS;
";

const SCENARIO_CIF: &str = "\
_struct.title
;
Crystal structure of example protein
;
_exptl.method   'X-RAY DIFFRACTION'
";

fn pdb(text: &str) -> ProteinMetadata {
    extract_str(text, StructureFormat::Pdb)
}

fn extracted(value: &str) -> FieldValue {
    FieldValue::Extracted(value.to_string())
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_pdb_scenario_extracts_all_fields() {
    let metadata = pdb(SCENARIO_PDB);

    assert_eq!(metadata.title(), &extracted("LEGUME LECTIN COMPLEX"));
    assert_eq!(metadata.molecule(), &extracted("LECTIN"));
    assert_eq!(metadata.keywords(), &extracted("LECTIN, SUGAR-BINDING PROTEIN"));
    assert_eq!(metadata.method(), &extracted("X-RAY DIFFRACTION"));
    assert_eq!(metadata.organism(), &extracted("PHASEOLUS VULGARIS"));
}

#[test]
fn test_mmcif_scenario_extracts_title_and_method() {
    let metadata = extract_str(SCENARIO_CIF, StructureFormat::Mmcif);

    assert_eq!(metadata.title(), &extracted("Crystal structure of example protein"));
    assert_eq!(metadata.method(), &extracted("X-RAY DIFFRACTION"));
    assert_eq!(metadata.molecule(), &FieldValue::Unavailable);
    assert_eq!(metadata.keywords(), &FieldValue::Unavailable);
    assert_eq!(metadata.organism(), &FieldValue::Unavailable);
}

#[test]
fn test_unknown_format_is_all_unavailable() {
    let metadata = extract_str(SCENARIO_PDB, StructureFormat::from_tag("xyz"));

    assert_eq!(metadata.len(), 5);
    assert_eq!(metadata.available_count(), 0);
}

#[test]
fn test_compnd_protein_without_molecule_label() {
    let metadata = pdb("COMPND    MOL_ID: 1; SOME PROTEIN FRAGMENT;\n");
    assert_eq!(metadata.molecule(), &extracted("Protein"));
}

// ============================================================================
// PDB Title Fallbacks
// ============================================================================

#[test]
fn test_title_ignores_other_records() {
    let text = "HEADER    HYDROLASE   01-JAN-90   1LYZ\nREMARK   1 TITLE  SOMETHING ELSE\nTITLE     HEN EGG WHITE LYSOZYME\n";
    assert_eq!(pdb(text).title(), &extracted("HEN EGG WHITE LYSOZYME"));
}

#[test]
fn test_title_falls_back_to_header() {
    let text = "HEADER    HYDROLASE                               01-JAN-90   1LYZ\n";
    assert_eq!(
        pdb(text).title(),
        &extracted("HYDROLASE                               01-JAN-90   1LYZ")
    );
}

#[test]
fn test_title_unavailable_without_title_or_header() {
    assert_eq!(pdb("EXPDTA    X-RAY DIFFRACTION\n").title(), &FieldValue::Unavailable);
}

#[test]
fn test_multi_line_title_is_concatenated() {
    let text = "TITLE     CRYSTAL STRUCTURE OF\nTITLE    2 A LECTIN\n";
    assert_eq!(pdb(text).title(), &extracted("CRYSTAL STRUCTURE OF A LECTIN"));
}

// ============================================================================
// PDB Molecule and Organism Fallbacks
// ============================================================================

#[test]
fn test_molecule_label_is_case_insensitive() {
    assert_eq!(pdb("COMPND    mol_id: 1; molecule: lysozyme c;\n").molecule(), &extracted("lysozyme c"));
}

#[test]
fn test_molecule_unavailable_without_label_or_protein() {
    assert_eq!(pdb("COMPND    MOL_ID: 1; DNA DUPLEX;\n").molecule(), &FieldValue::Unavailable);
    assert_eq!(pdb("TITLE     SOME PROTEIN\n").molecule(), &FieldValue::Unavailable);
}

#[test]
fn test_organism_plain_label() {
    let text = "SOURCE    MOL_ID: 1; ORGANISM: GALLUS GALLUS; ORGAN: EGG\n";
    assert_eq!(pdb(text).organism(), &extracted("GALLUS GALLUS"));
}

#[test]
fn test_organism_scientific_preferred_over_plain() {
    let text = "SOURCE    ORGANISM: CHICKEN;\nSOURCE   2 ORGANISM_SCIENTIFIC: GALLUS GALLUS;\n";
    assert_eq!(pdb(text).organism(), &extracted("GALLUS GALLUS"));
}

#[test]
fn test_organism_scientific_ends_at_newline() {
    let text = "SOURCE    MOL_ID: 1; ORGANISM_SCIENTIFIC: HOMO SAPIENS\nSOURCE   2 ORGANISM_COMMON: HUMAN;\n";
    assert_eq!(pdb(text).organism(), &extracted("HOMO SAPIENS"));
}

#[test]
fn test_organism_falls_back_to_first_token() {
    let text = "SOURCE    BOVINE (BOS TAURUS) PANCREAS; SYNTHETIC\n";
    assert_eq!(pdb(text).organism(), &extracted("BOVINE (BOS TAURUS) PANCREAS"));
}

#[test]
fn test_organism_first_token_rejects_molecule_label() {
    let text = "SOURCE    MOLECULE: LECTIN; NOT AN ORGANISM\n";
    assert_eq!(pdb(text).organism(), &FieldValue::Unavailable);
}

#[test]
fn test_organism_unavailable_when_source_only_has_mol_id() {
    let text = "SOURCE    MOL_ID: 1;\nSOURCE   2 SYNTHETIC: YES;\n";
    assert_eq!(pdb(text).organism(), &FieldValue::Unavailable);
}

// ============================================================================
// mmCIF Items
// ============================================================================

#[test]
fn test_mmcif_double_quoted_method() {
    let metadata = extract_str("_exptl.method \"SOLUTION NMR\"\n", StructureFormat::Mmcif);
    assert_eq!(metadata.method(), &extracted("SOLUTION NMR"));
}

#[test]
fn test_mmcif_fence_excludes_delimiters() {
    let text = "_struct.title\n;\n  Spaced title  \n;\n_exptl.method NMR\n";
    let metadata = extract_str(text, StructureFormat::Mmcif);
    assert_eq!(metadata.title(), &extracted("Spaced title"));
    assert_eq!(metadata.method(), &extracted("NMR"));
}

#[test]
fn test_mmcif_fence_bleeding_into_tag_is_unavailable() {
    let text = "_struct.title\n;\n_struct.pdbx_descriptor\n;\n";
    let metadata = extract_str(text, StructureFormat::Mmcif);
    assert_eq!(metadata.title(), &FieldValue::Unavailable);
}

#[test]
fn test_mmcif_fixture() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/4hhb_header.cif");
    let doc = StructureDocument::from_path(&path, None).expect("fixture loads");
    assert_eq!(doc.format(), StructureFormat::Mmcif);

    let metadata = extract(&doc);
    assert_eq!(
        metadata.title(),
        &extracted("THE CRYSTAL STRUCTURE OF HUMAN DEOXYHAEMOGLOBIN AT 1.74 ANGSTROMS RESOLUTION")
    );
    assert_eq!(
        metadata.molecule(),
        &extracted(
            "HEMOGLOBIN (DEOXY) (ALPHA CHAIN), HEMOGLOBIN (DEOXY) (BETA CHAIN), \
             PROTOPORPHYRIN IX CONTAINING FE, water"
        )
    );
    assert_eq!(metadata.keywords(), &extracted("OXYGEN TRANSPORT"));
    assert_eq!(metadata.method(), &extracted("X-RAY DIFFRACTION"));
    assert_eq!(metadata.organism(), &extracted("Homo sapiens"));
    assert_eq!(detect_accession(&doc), None);
}

#[test]
fn test_pdb_fixture() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/1fat_header.pdb");
    let doc = StructureDocument::from_path(&path, None).expect("fixture loads");
    assert_eq!(doc.format(), StructureFormat::Pdb);

    let metadata = extract(&doc);
    assert_eq!(
        metadata.title(),
        &extracted("PHYTOHEMAGGLUTININ-L, A LECTIN FROM PHASEOLUS VULGARIS, IN COMPLEX WITH A SUGAR")
    );
    assert_eq!(metadata.molecule(), &extracted("PHYTOHEMAGGLUTININ-L"));
    assert_eq!(
        metadata.keywords(),
        &extracted("LECTIN, LEGUME LECTIN, SUGAR-BINDING PROTEIN, HEMAGGLUTININ, GLYCOPROTEIN")
    );
    assert_eq!(metadata.method(), &extracted("X-RAY DIFFRACTION"));
    assert_eq!(metadata.organism(), &extracted("PHASEOLUS VULGARIS"));
    assert_eq!(detect_accession(&doc).map(|a| a.to_string()), Some("1FAT".to_string()));
}

#[test]
fn test_gzip_input_matches_plain_input() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(SCENARIO_PDB.as_bytes()).expect("compresses");
    let compressed = encoder.finish().expect("compresses");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("1fat.pdb.gz");
    std::fs::write(&path, compressed).expect("writes");

    let doc = StructureDocument::from_path(&path, None).expect("gzip decodes");
    assert_eq!(doc.format(), StructureFormat::Pdb);
    assert_eq!(extract(&doc), pdb(SCENARIO_PDB));
}

// ============================================================================
// Boundary Behaviour
// ============================================================================

#[test]
fn test_empty_input_has_five_unavailable_fields() {
    for format in [StructureFormat::Pdb, StructureFormat::Mmcif, StructureFormat::Unsupported] {
        let metadata = extract_str("", format);
        assert_eq!(metadata.len(), 5);
        assert_eq!(metadata, ProteinMetadata::unavailable());
    }
}

#[test]
fn test_field_order_is_fixed() {
    let keys: Vec<&str> = pdb(SCENARIO_PDB).iter().map(|(f, _)| f.key()).collect();
    assert_eq!(keys, vec!["title", "molecule", "keywords", "method", "organism"]);
}

#[test]
fn test_json_shape() {
    let metadata = extract_str(SCENARIO_CIF, StructureFormat::Mmcif);
    let value = serde_json::to_value(&metadata).expect("serializes");

    assert_eq!(value["title"], "Crystal structure of example protein");
    assert_eq!(value["method"], "X-RAY DIFFRACTION");
    assert!(value["organism"].is_null());
    assert_eq!(value.as_object().map(|o| o.len()), Some(5));
}

#[test]
fn test_extraction_from_other_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| pdb(SCENARIO_PDB)))
        .collect();

    let expected = pdb(SCENARIO_PDB);
    for handle in handles {
        assert_eq!(handle.join().expect("thread finishes"), expected);
    }
}

// ============================================================================
// Properties
// ============================================================================

fn any_format() -> impl Strategy<Value = StructureFormat> {
    prop_oneof![
        Just(StructureFormat::Pdb),
        Just(StructureFormat::Mmcif),
        Just(StructureFormat::Unsupported),
    ]
}

fn record_like_text() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        "(HEADER|TITLE|COMPND|SOURCE|KEYWDS|EXPDTA)[ ]{1,5}[ -~]{0,40}",
        "_(struct|exptl|entity)\\.[a-z_]{1,12}[ ]+('[ -~]{0,20}'|[ -~]{0,20})",
        Just(";".to_string()),
        "[ -~]{0,40}",
    ];
    prop::collection::vec(line, 0..12).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn prop_always_five_fields(text in any::<String>(), format in any_format()) {
        let metadata = extract_str(&text, format);
        prop_assert_eq!(metadata.len(), 5);
        prop_assert_eq!(metadata.iter().count(), 5);
    }

    #[test]
    fn prop_extraction_is_idempotent(text in record_like_text(), format in any_format()) {
        prop_assert_eq!(extract_str(&text, format), extract_str(&text, format));
    }

    #[test]
    fn prop_extracted_values_are_trimmed(text in record_like_text(), format in any_format()) {
        let metadata = extract_str(&text, format);
        for field in MetadataField::ALL {
            if let Some(value) = metadata.get(field).as_deref() {
                prop_assert!(!value.is_empty());
                prop_assert_eq!(value, value.trim());
            }
        }
    }

    #[test]
    fn prop_title_line_wins(title in "[A-Z][A-Z0-9 ,-]{0,30}[A-Z0-9]", header in "[A-Z ]{0,20}") {
        let text = format!("HEADER    {}\nTITLE     {}\nEXPDTA    NMR\n", header, title);
        let metadata = pdb(&text);
        prop_assert_eq!(metadata.title().as_deref(), Some(title.as_str()));
    }
}
