pub mod consts;
mod model;

pub use model::{CondConfig, GeneratorConfig, OutputConfig};
