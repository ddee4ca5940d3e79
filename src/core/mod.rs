pub mod calculator;
pub mod decoder;
pub mod logic;
pub mod parser;
pub mod timestamp;

pub use logic::{Core, Pipeline, PipelineOutput};
pub use parser::{ParseOptions, PipelineStats};
