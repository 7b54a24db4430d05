//! 라이브러리 공통 에러 타입

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphDctError {
    #[error("unknown symbol: {0:?}")]
    UnknownSymbol(String),

    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// 모든 계수가 제거되어 압축률 분모가 0
    #[error("cutoff {cutoff} suppressed every coefficient")]
    DegenerateCompression { cutoff: f64 },

    #[error("dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("invalid glyph data: {0}")]
    InvalidGlyph(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GlyphDctError>;
