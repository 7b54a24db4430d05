//! # 글리프 DCT 핵심 모듈
//!
//! 글리프 조회 → 2D DCT → 계수 컷오프 → 역변환 → 압축률

use ndarray::Array2;

pub mod error;
pub mod glyph;
pub mod pipeline;
pub mod report;
pub mod transform;

/// N×N 실수 행렬
pub type Matrix = Array2<f64>;

// 주요 타입들 재수출
pub use error::{GlyphDctError, Result};
pub use glyph::{Glyph, GlyphSource, GlyphTable, GLYPH_SIZE};
pub use pipeline::{
    CompressionPipeline, CompressionResult, CutoffPolicy, DegeneratePolicy, PipelineConfig,
    SweepPoint,
};
pub use transform::TransformEngine;
