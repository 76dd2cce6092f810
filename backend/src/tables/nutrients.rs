//! Static nutrient averages per soil type. These are agronomic reference
//! values, not something inferred from the uploaded image.

use shared::NutrientProfile;

const SOIL_NUTRIENTS: [(&str, NutrientProfile); 7] = [
    ("Alluvial_Soil", NutrientProfile { nitrogen: 80, phosphorus: 45, potassium: 50, ph: 6.8 }),
    ("Black_Soil", NutrientProfile { nitrogen: 65, phosphorus: 35, potassium: 60, ph: 7.6 }),
    ("Cinder_Soil", NutrientProfile { nitrogen: 20, phosphorus: 15, potassium: 25, ph: 6.2 }),
    ("Clay_Soil", NutrientProfile { nitrogen: 55, phosphorus: 30, potassium: 40, ph: 6.5 }),
    ("Laterite_Soil", NutrientProfile { nitrogen: 30, phosphorus: 20, potassium: 35, ph: 5.5 }),
    ("Peat_Soil", NutrientProfile { nitrogen: 90, phosphorus: 25, potassium: 30, ph: 4.8 }),
    ("Yellow_Soil", NutrientProfile { nitrogen: 40, phosphorus: 25, potassium: 30, ph: 5.8 }),
];

pub fn lookup(soil_type: &str) -> Option<NutrientProfile> {
    SOIL_NUTRIENTS
        .iter()
        .find(|(label, _)| *label == soil_type)
        .map(|(_, profile)| *profile)
}
