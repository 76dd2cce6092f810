//! Class-label and feature-order contracts for the three model artifacts.
//!
//! Every array here mirrors the index order the corresponding artifact was
//! trained with (alphabetical directory order for the image models, sklearn
//! `classes_` order for the tabular one). Reordering an entry silently remaps
//! every prediction, so the orders are pinned by tests below.

/// Output classes of the plant-disease artifact.
pub const DISEASE_CLASSES: [&str; 15] = [
    "Pepper__bell___Bacterial_spot",
    "Pepper__bell___healthy",
    "Potato___Early_blight",
    "Potato___Late_blight",
    "Potato___healthy",
    "Tomato_Bacterial_spot",
    "Tomato_Early_blight",
    "Tomato_Late_blight",
    "Tomato_Leaf_Mold",
    "Tomato_Septoria_leaf_spot",
    "Tomato_Spider_mites_Two_spotted_spider_mite",
    "Tomato__Target_Spot",
    "Tomato__Tomato_YellowLeaf__Curl_Virus",
    "Tomato__Tomato_mosaic_virus",
    "Tomato_healthy",
];

/// Output classes of the soil-type artifact.
pub const SOIL_CLASSES: [&str; 7] = [
    "Alluvial_Soil",
    "Black_Soil",
    "Cinder_Soil",
    "Clay_Soil",
    "Laterite_Soil",
    "Peat_Soil",
    "Yellow_Soil",
];

/// Output classes of the crop-recommendation artifact.
pub const CROP_CLASSES: [&str; 22] = [
    "apple",
    "banana",
    "blackgram",
    "chickpea",
    "coconut",
    "coffee",
    "cotton",
    "grapes",
    "jute",
    "kidneybeans",
    "lentil",
    "maize",
    "mango",
    "mothbeans",
    "mungbean",
    "muskmelon",
    "orange",
    "papaya",
    "pigeonpeas",
    "pomegranate",
    "rice",
    "watermelon",
];

/// Input column order of the crop-recommendation artifact.
pub const CROP_FEATURES: [&str; 7] = [
    "N",
    "P",
    "K",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
];

/// Index and value of the largest probability. `None` on an empty vector.
pub fn argmax(probabilities: &[f32]) -> Option<(usize, f32)> {
    probabilities
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(index, &probability)| (index, probability))
}

/// Turn a raw class label into its display form: triple underscores first,
/// then single underscores, both replaced by spaces.
pub fn display_label(label: &str) -> String {
    label.replace("___", " ").replace('_', " ")
}

/// Format a probability as a percentage string with two decimals.
pub fn format_confidence(probability: f32) -> String {
    format!("{:.2}%", probability * 100.0)
}
