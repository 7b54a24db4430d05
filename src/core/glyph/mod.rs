//! 글리프 소스 - 심볼을 8×8 이진 픽셀 행렬로 변환

pub mod alphabet;
pub mod source;

#[cfg(test)]
mod __tests__;

pub use alphabet::{GLYPH_SIZE, LOWERCASE};
pub use source::{Glyph, GlyphSource, GlyphTable};
