use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CropResponse {
    pub crop: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub fertilizers: String,
    pub notes: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiseaseResponse {
    pub disease: String,
    pub confidence: String,
    pub recommendation: Recommendation,
}

/// Nutrient averages for a soil type. These come from a static agronomic
/// table, not from the uploaded image.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct NutrientProfile {
    #[serde(rename = "Nitrogen")]
    pub nitrogen: u32,
    #[serde(rename = "Phosphorus")]
    pub phosphorus: u32,
    #[serde(rename = "Potassium")]
    pub potassium: u32,
    pub ph: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SoilResponse {
    pub soil_type: String,
    pub confidence: String,
    /// Empty object when the predicted label has no entry in the table.
    pub nutrients: serde_json::Value,
}
