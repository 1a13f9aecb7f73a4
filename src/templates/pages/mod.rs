pub mod predictor;

pub use predictor::{predictor_page, PredictorVm};
