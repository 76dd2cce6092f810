//! Fertilizer recommendations keyed by disease label, loaded once from the
//! CSV artifact that ships next to the models.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use shared::Recommendation;

const HEALTHY_NOTES: &str =
    "The plant is healthy, so no treatment is required. Continue with regular care.";
const UNKNOWN_NOTES: &str = "No recommendation available for this condition.";

#[derive(Debug, Deserialize)]
struct FertilizerRow {
    #[serde(rename = "Disease")]
    disease: String,
    #[serde(rename = "Fertilizer1")]
    fertilizer1: Option<String>,
    #[serde(rename = "Fertilizer2")]
    fertilizer2: Option<String>,
    #[serde(rename = "Notes")]
    notes: Option<String>,
}

pub struct FertilizerTable {
    rows: HashMap<String, FertilizerRow>,
}

impl FertilizerTable {
    pub fn load(path: &Path) -> Result<Self, csv::Error> {
        Self::from_reader(File::open(path)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut rows = HashMap::new();
        for row in csv_reader.deserialize() {
            let row: FertilizerRow = row?;
            rows.insert(row.disease.clone(), row);
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Look up a recommendation by exact raw label.
    ///
    /// Healthy rows always report "no treatment needed" regardless of what
    /// the table says for them; rows whose fertilizer columns are empty or
    /// literal "none" report "None" with the notes passed through verbatim.
    pub fn recommendation(&self, disease: &str) -> Recommendation {
        let Some(row) = self.rows.get(disease) else {
            return Recommendation {
                fertilizers: "Unknown".to_string(),
                notes: UNKNOWN_NOTES.to_string(),
            };
        };

        if disease.to_lowercase().contains("healthy") {
            return Recommendation {
                fertilizers: "None needed".to_string(),
                notes: HEALTHY_NOTES.to_string(),
            };
        }

        let names: Vec<&str> = [row.fertilizer1.as_deref(), row.fertilizer2.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case("none"))
            .collect();

        Recommendation {
            fertilizers: if names.is_empty() {
                "None".to_string()
            } else {
                names.join(" or ")
            },
            notes: row.notes.clone().unwrap_or_default(),
        }
    }
}
