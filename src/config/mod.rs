mod model;

pub use model::{CheckConfig, DEFAULT_MAX_LENGTH, DEFAULT_TAG};
