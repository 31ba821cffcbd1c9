use serde::{Deserialize, Deserializer};

use super::CatalogError;
use crate::advising::domain::{parse_decimal, parse_integer, University, UniversityId};

/// Record shape of the `universities.json` seed file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CatalogSeedRow {
    #[serde(default)]
    id: Option<String>,
    name: String,
    country: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    ranking: Option<u16>,
    #[serde(rename = "minGPA")]
    min_gpa: f32,
    #[serde(rename = "minIELTS", default)]
    min_ielts: Option<f32>,
    #[serde(rename = "minGRE", default)]
    min_gre: Option<u16>,
    tuition_min: u32,
    tuition_max: u32,
    living_cost: u32,
    acceptance_rate: f32,
    #[serde(default)]
    website: String,
    #[serde(default)]
    description: String,
}

impl CatalogSeedRow {
    pub(super) fn into_university(self, _row: usize) -> Result<University, CatalogError> {
        let id = self
            .id
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| slug(&self.name));

        Ok(University {
            id: UniversityId(id),
            name: self.name,
            country: self.country,
            city: self.city,
            ranking: self.ranking,
            min_gpa: self.min_gpa,
            min_ielts: self.min_ielts,
            min_gre: self.min_gre,
            tuition_min: self.tuition_min,
            tuition_max: self.tuition_max,
            living_cost: self.living_cost,
            acceptance_rate: self.acceptance_rate,
            website: self.website,
            description: self.description,
        })
    }
}

/// Row shape of a spreadsheet CSV export of the catalog.
#[derive(Debug, Deserialize)]
pub(super) struct CatalogCsvRow {
    #[serde(rename = "Id", default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(rename = "Name", default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(rename = "Country", default, deserialize_with = "empty_string_as_none")]
    country: Option<String>,
    #[serde(rename = "City", default, deserialize_with = "empty_string_as_none")]
    city: Option<String>,
    #[serde(rename = "Ranking", default, deserialize_with = "empty_string_as_none")]
    ranking: Option<String>,
    #[serde(rename = "Min GPA", default, deserialize_with = "empty_string_as_none")]
    min_gpa: Option<String>,
    #[serde(rename = "Min IELTS", default, deserialize_with = "empty_string_as_none")]
    min_ielts: Option<String>,
    #[serde(rename = "Min GRE", default, deserialize_with = "empty_string_as_none")]
    min_gre: Option<String>,
    #[serde(rename = "Tuition Min", default, deserialize_with = "empty_string_as_none")]
    tuition_min: Option<String>,
    #[serde(rename = "Tuition Max", default, deserialize_with = "empty_string_as_none")]
    tuition_max: Option<String>,
    #[serde(rename = "Living Cost", default, deserialize_with = "empty_string_as_none")]
    living_cost: Option<String>,
    #[serde(
        rename = "Acceptance Rate",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    acceptance_rate: Option<String>,
    #[serde(rename = "Website", default, deserialize_with = "empty_string_as_none")]
    website: Option<String>,
    #[serde(
        rename = "Description",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    description: Option<String>,
}

impl CatalogCsvRow {
    pub(super) fn into_university(self, row: usize) -> Result<University, CatalogError> {
        let name = self
            .name
            .ok_or(CatalogError::MissingField { row, field: "Name" })?;
        let country = self.country.ok_or(CatalogError::MissingField {
            row,
            field: "Country",
        })?;

        let min_gpa = parse_decimal(self.min_gpa.as_deref()).ok_or(CatalogError::MissingField {
            row,
            field: "Min GPA",
        })?;
        let tuition_min =
            parse_integer(self.tuition_min.as_deref()).ok_or(CatalogError::MissingField {
                row,
                field: "Tuition Min",
            })?;
        let tuition_max =
            parse_integer(self.tuition_max.as_deref()).ok_or(CatalogError::MissingField {
                row,
                field: "Tuition Max",
            })?;
        let living_cost =
            parse_integer(self.living_cost.as_deref()).ok_or(CatalogError::MissingField {
                row,
                field: "Living Cost",
            })?;
        let acceptance_rate =
            parse_decimal(self.acceptance_rate.as_deref()).ok_or(CatalogError::MissingField {
                row,
                field: "Acceptance Rate",
            })?;

        let id = self
            .id
            .unwrap_or_else(|| slug(&name));

        Ok(University {
            id: UniversityId(id),
            name,
            country,
            city: self.city.unwrap_or_default(),
            ranking: parse_integer(self.ranking.as_deref()),
            min_gpa,
            min_ielts: parse_decimal(self.min_ielts.as_deref()),
            min_gre: parse_integer(self.min_gre.as_deref()),
            tuition_min,
            tuition_max,
            living_cost,
            acceptance_rate,
            website: self.website.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn slug(name: &str) -> String {
    let cleaned = name.replace(['\u{feff}', '\u{200b}'], "");
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_ascii_lowercase()
}
