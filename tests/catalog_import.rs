//! Catalog ingestion scenarios covering the JSON seed format and CSV exports.

use admit_ai::catalog::{CatalogError, UniversityCatalog};
use admit_ai::advising::UniversityId;

const SEED_JSON: &str = r#"[
    {
        "id": "state-university",
        "name": "State University",
        "country": "USA",
        "city": "Columbus",
        "ranking": 120,
        "minGPA": 3.5,
        "minIELTS": 6.5,
        "minGRE": 310,
        "tuitionMin": 32000,
        "tuitionMax": 40000,
        "livingCost": 12000,
        "acceptanceRate": 45.0,
        "website": "https://state.example.edu",
        "description": "Large public research university."
    },
    {
        "name": "Northern Institute of Technology",
        "country": "Canada",
        "minGPA": 3.2,
        "tuitionMin": 20000,
        "tuitionMax": 28000,
        "livingCost": 10000,
        "acceptanceRate": 55.0
    }
]"#;

#[test]
fn json_seed_loads_with_camel_case_fields() {
    let catalog = UniversityCatalog::from_json_reader(SEED_JSON.as_bytes())
        .expect("seed parses");

    assert_eq!(catalog.len(), 2);
    let state = catalog
        .find(&UniversityId("state-university".to_string()))
        .expect("state university present");
    assert_eq!(state.min_gpa, 3.5);
    assert_eq!(state.min_ielts, Some(6.5));
    assert_eq!(state.tuition_max, 40000);
}

#[test]
fn json_rows_without_an_id_get_a_name_slug() {
    let catalog = UniversityCatalog::from_json_reader(SEED_JSON.as_bytes())
        .expect("seed parses");

    let northern = catalog
        .find(&UniversityId(
            "northern-institute-of-technology".to_string(),
        ))
        .expect("slug id assigned");
    assert_eq!(northern.min_ielts, None);
    assert_eq!(northern.ranking, None);
}

#[test]
fn csv_export_loads_with_blank_optionals_as_absent() {
    let csv = "\
Id,Name,Country,City,Ranking,Min GPA,Min IELTS,Min GRE,Tuition Min,Tuition Max,Living Cost,Acceptance Rate,Website,Description
,State University,USA,Columbus,120,3.5,6.5,310,32000,40000,12000,45,https://state.example.edu,Large public research university.
ivy-institute,Ivy Institute,USA,,N/A,3.9,,,48000,62000,18000,6,,
";

    let catalog = UniversityCatalog::from_csv_reader(csv.as_bytes()).expect("csv parses");
    assert_eq!(catalog.len(), 2);

    let state = catalog
        .find(&UniversityId("state-university".to_string()))
        .expect("blank id falls back to the name slug");
    assert_eq!(state.ranking, Some(120));

    let ivy = catalog
        .find(&UniversityId("ivy-institute".to_string()))
        .expect("ivy present");
    // "N/A" is unparseable and blank columns are empty: both load as absent.
    assert_eq!(ivy.ranking, None);
    assert_eq!(ivy.min_ielts, None);
    assert_eq!(ivy.min_gre, None);
    assert_eq!(ivy.acceptance_rate, 6.0);
}

#[test]
fn csv_row_missing_a_required_column_is_rejected() {
    let csv = "\
Name,Country,Min GPA,Tuition Min,Tuition Max,Living Cost,Acceptance Rate
State University,USA,not-a-number,32000,40000,12000,45
";

    let error = UniversityCatalog::from_csv_reader(csv.as_bytes())
        .expect_err("unparseable required numeric is rejected");
    assert!(matches!(
        error,
        CatalogError::MissingField {
            row: 0,
            field: "Min GPA"
        }
    ));
}

#[test]
fn malformed_json_surfaces_a_catalog_error() {
    let error = UniversityCatalog::from_json_reader("{not json".as_bytes())
        .expect_err("bad payload is rejected");
    assert!(matches!(error, CatalogError::Json(_)));
}
