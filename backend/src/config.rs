use std::env;
use std::path::PathBuf;

/// Server settings, read once from the environment (with `.env` support via
/// dotenv in `main`). Every entry has a default that matches the repo layout.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub crop_model_path: PathBuf,
    pub disease_model_path: PathBuf,
    pub soil_model_path: PathBuf,
    pub fertilizer_table_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT").unwrap_or_else(|_| "8081".to_string());
        Self {
            bind_address: format!("0.0.0.0:{}", port),
            crop_model_path: path_var("CROP_MODEL_PATH", "models/crop_recommendation.onnx"),
            disease_model_path: path_var("DISEASE_MODEL_PATH", "models/plant_disease.onnx"),
            soil_model_path: path_var("SOIL_MODEL_PATH", "models/soil_type.onnx"),
            fertilizer_table_path: path_var(
                "FERTILIZER_TABLE_PATH",
                "data/fertilizer_recommendations.csv",
            ),
        }
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var(name).unwrap_or_else(|_| default.to_string()).into()
}
