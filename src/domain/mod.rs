pub mod features;
pub mod inputs;
pub mod reference;
