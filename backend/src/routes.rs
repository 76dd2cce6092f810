use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures::{StreamExt, TryStreamExt};
use log::info;
use serde_json::{json, Value};
use shared::{CropResponse, DiseaseResponse, SoilResponse};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::inference::labels::{self, CROP_CLASSES, CROP_FEATURES, DISEASE_CLASSES, SOIL_CLASSES};
use crate::inference::model::InferenceError;
use crate::inference::preprocess::preprocess_image;
use crate::tables::nutrients;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/predict").route(web::post().to(predict_crop)))
        .service(web::resource("/predict_disease").route(web::post().to(predict_disease)))
        .service(web::resource("/predict_soil").route(web::post().to(predict_soil)));
}

/// Collect the bytes of the `file` field, or fail the upload precondition.
async fn read_upload(mut payload: Multipart) -> Result<Vec<u8>, ApiError> {
    while let Ok(Some(mut field)) = payload.try_next().await {
        if field.name() != Some("file") {
            continue;
        }
        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk =
                chunk.map_err(|e| ApiError::Inference(format!("failed to read upload: {e}")))?;
            data.extend_from_slice(&chunk);
        }
        return Ok(data);
    }
    Err(ApiError::Validation("No file part".to_string()))
}

fn top_class<'a>(
    probabilities: &[f32],
    classes: &'a [&'a str],
) -> Result<(&'a str, f32), ApiError> {
    let (index, confidence) = labels::argmax(probabilities)
        .ok_or_else(|| ApiError::Inference("model returned no probabilities".to_string()))?;
    let label = classes
        .get(index)
        .copied()
        .ok_or_else(|| ApiError::Inference(format!("class index {index} out of range")))?;
    Ok((label, confidence))
}

/// POST /predict: flat numeric feature record in, top crop label out.
async fn predict_crop(
    context: web::Data<AppContext>,
    payload: web::Json<serde_json::Map<String, Value>>,
) -> Result<HttpResponse, ApiError> {
    let mut features = Vec::with_capacity(CROP_FEATURES.len());
    for name in CROP_FEATURES {
        let value = payload
            .get(name)
            .ok_or_else(|| InferenceError::MissingFeature(name.to_string()))?
            .as_f64()
            .ok_or_else(|| InferenceError::NonNumericFeature(name.to_string()))?;
        features.push(value as f32);
    }

    let probabilities = context.crop_model.predict(&features)?;
    let (crop, _) = top_class(&probabilities, &CROP_CLASSES)?;

    info!("Crop recommendation: {crop}");
    Ok(HttpResponse::Ok().json(CropResponse {
        crop: crop.to_string(),
    }))
}

/// POST /predict_disease: image upload in, diagnosis plus fertilizer
/// recommendation out.
async fn predict_disease(
    context: web::Data<AppContext>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let bytes = read_upload(payload).await?;
    let pixels = preprocess_image(&bytes)?;
    let probabilities = context.disease_model.predict(&pixels)?;
    let (label, confidence) = top_class(&probabilities, &DISEASE_CLASSES)?;

    let recommendation = context.fertilizers.recommendation(label);
    let confidence = labels::format_confidence(confidence);
    info!("Disease prediction: {label} ({confidence})");

    Ok(HttpResponse::Ok().json(DiseaseResponse {
        disease: labels::display_label(label),
        confidence,
        recommendation,
    }))
}

/// POST /predict_soil: image upload in, soil type plus static nutrient
/// profile out.
async fn predict_soil(
    context: web::Data<AppContext>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let bytes = read_upload(payload).await?;
    let pixels = preprocess_image(&bytes)?;
    let probabilities = context.soil_model.predict(&pixels)?;
    let (label, confidence) = top_class(&probabilities, &SOIL_CLASSES)?;

    let nutrients = match nutrients::lookup(label) {
        Some(profile) => {
            serde_json::to_value(profile).map_err(|e| ApiError::Inference(e.to_string()))?
        }
        None => json!({}),
    };
    let confidence = labels::format_confidence(confidence);
    info!("Soil prediction: {label} ({confidence})");

    Ok(HttpResponse::Ok().json(SoilResponse {
        soil_type: labels::display_label(label),
        confidence,
        nutrients,
    }))
}
