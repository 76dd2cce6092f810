use std::path::Path;

use thiserror::Error;
use tract_onnx::prelude::*;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
    #[error("model error: {0}")]
    Model(String),
    #[error("model expects {expected} input values, got {actual}")]
    InputShape { expected: usize, actual: usize },
    #[error("missing feature '{0}'")]
    MissingFeature(String),
    #[error("feature '{0}' is not numeric")]
    NonNumericFeature(String),
}

/// An opaque pre-trained classifier: flat f32 input in, one probability
/// vector out. Route handlers only ever see this trait, which is also the
/// seam the route tests use to inject fixed predictions.
pub trait Classifier: Send + Sync {
    fn predict(&self, input: &[f32]) -> Result<Vec<f32>, InferenceError>;
}

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// ONNX-backed classifier. The plan is built once at startup and `run` takes
/// `&self`, so one instance serves all workers without locking.
pub struct OnnxModel {
    plan: Plan,
    input_shape: Vec<usize>,
}

impl OnnxModel {
    pub fn load(path: &Path, input_shape: &[usize]) -> Result<Self, InferenceError> {
        let dims: TVec<TDim> = input_shape.iter().map(|d| d.to_dim()).collect();
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(|e| InferenceError::Model(e.to_string()))?
            .with_input_fact(0, f32::fact(dims).into())
            .map_err(|e| InferenceError::Model(e.to_string()))?
            .into_optimized()
            .map_err(|e| InferenceError::Model(e.to_string()))?
            .into_runnable()
            .map_err(|e| InferenceError::Model(e.to_string()))?;
        Ok(Self {
            plan,
            input_shape: input_shape.to_vec(),
        })
    }
}

impl Classifier for OnnxModel {
    fn predict(&self, input: &[f32]) -> Result<Vec<f32>, InferenceError> {
        let expected: usize = self.input_shape.iter().product();
        if input.len() != expected {
            return Err(InferenceError::InputShape {
                expected,
                actual: input.len(),
            });
        }
        let tensor = Tensor::from_shape(&self.input_shape, input)
            .map_err(|e| InferenceError::Model(e.to_string()))?;
        let outputs = self
            .plan
            .run(tvec!(tensor.into()))
            .map_err(|e| InferenceError::Model(e.to_string()))?;
        let probabilities = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| InferenceError::Model(e.to_string()))?;
        Ok(probabilities.iter().copied().collect())
    }
}
