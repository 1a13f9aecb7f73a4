pub mod artifact;
pub mod predictor;
pub mod schema;
pub mod store;

pub use artifact::ModelArtifact;
pub use predictor::{estimate, Estimate, RegressionModel};
pub use store::ModelStore;
