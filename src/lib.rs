//! 글리프 DCT 라이브러리
//!
//! 8×8 글자 비트맵에 2D DCT 를 적용하고 작은 계수를 잘라내어
//! 변환 영역 압축이 이미지 품질에 미치는 영향을 보여준다.

pub mod core;
pub mod server;

// 핵심 모듈들 재수출
pub use crate::core::{
    CompressionPipeline, CompressionResult, CutoffPolicy, DegeneratePolicy, Glyph,
    GlyphDctError, GlyphSource, GlyphTable, Matrix, PipelineConfig, Result, SweepPoint,
    TransformEngine, GLYPH_SIZE,
};
