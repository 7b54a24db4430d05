//! 압축 파이프라인 - 유일한 외부 진입점 `CompressionPipeline::render`

pub mod config;
pub mod pipeline;
pub mod quantize;
pub mod result;

#[cfg(test)]
mod __tests__;

pub use config::{CutoffPolicy, DegeneratePolicy, PipelineConfig};
pub use pipeline::CompressionPipeline;
pub use quantize::{compression_rate, count_retained, linear_cutoffs, quantize};
pub use result::{CompressionResult, SweepPoint};
