use crate::config::Config;
use crate::inference::labels::CROP_FEATURES;
use crate::inference::model::{Classifier, OnnxModel};
use crate::inference::preprocess::IMAGE_SIZE;
use crate::tables::fertilizer::FertilizerTable;

/// Everything a handler needs, built once at startup and handed to actix via
/// `web::Data`. Models and the table are read-only afterwards, so requests
/// share them without locking.
pub struct AppContext {
    pub crop_model: Box<dyn Classifier>,
    pub disease_model: Box<dyn Classifier>,
    pub soil_model: Box<dyn Classifier>,
    pub fertilizers: FertilizerTable,
}

impl AppContext {
    pub fn load(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let image_shape = [1, IMAGE_SIZE as usize, IMAGE_SIZE as usize, 3];

        let crop_model = OnnxModel::load(&config.crop_model_path, &[1, CROP_FEATURES.len()])?;
        let disease_model = OnnxModel::load(&config.disease_model_path, &image_shape)?;
        let soil_model = OnnxModel::load(&config.soil_model_path, &image_shape)?;
        let fertilizers = FertilizerTable::load(&config.fertilizer_table_path)?;

        log::info!(
            "Loaded 3 models and {} fertilizer rows",
            fertilizers.len()
        );

        Ok(Self {
            crop_model: Box::new(crop_model),
            disease_model: Box::new(disease_model),
            soil_model: Box::new(soil_model),
            fertilizers,
        })
    }
}
