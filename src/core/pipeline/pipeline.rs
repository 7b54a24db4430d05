use log::{debug, warn};
use rayon::prelude::*;

use super::config::{DegeneratePolicy, PipelineConfig};
use super::quantize::{compression_rate, quantize};
use super::result::{CompressionResult, SweepPoint};
use crate::core::error::{GlyphDctError, Result};
use crate::core::glyph::{GlyphSource, GLYPH_SIZE};
use crate::core::transform::TransformEngine;

/// 글리프 조회 → DCT → 컷오프 → IDCT → 압축률 계산
///
/// 상태가 없으므로 하나의 인스턴스를 여러 스레드에서 공유해도 된다.
#[derive(Debug, Clone)]
pub struct CompressionPipeline {
    source: GlyphSource,
    engine: TransformEngine,
    config: PipelineConfig,
}

impl CompressionPipeline {
    pub fn new(source: GlyphSource, config: PipelineConfig) -> Result<Self> {
        Ok(Self {
            source,
            engine: TransformEngine::new(GLYPH_SIZE)?,
            config,
        })
    }

    /// 내장 알파벳 + 기본(strict) 설정
    pub fn with_defaults() -> Result<Self> {
        Self::new(GlyphSource::default(), PipelineConfig::default())
    }

    pub fn source(&self) -> &GlyphSource {
        &self.source
    }

    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn render(&self, symbol: &str, cutoff: f64) -> Result<CompressionResult> {
        let cutoff = self.config.resolve_cutoff(cutoff)?;
        let result = self.evaluate(symbol, cutoff)?;

        if result.is_degenerate() {
            match self.config.degenerate_policy {
                DegeneratePolicy::Reject => {
                    return Err(GlyphDctError::DegenerateCompression { cutoff })
                }
                DegeneratePolicy::Infinite => {
                    warn!("symbol {:?}: cutoff {} suppressed all coefficients", symbol, cutoff)
                }
            }
        }
        Ok(result)
    }

    /// 여러 컷오프에 대해 한 글자를 병렬로 평가. 결과 순서는 입력 순서와 같고
    /// 퇴화 지점은 정책과 관계없이 `compression_rate: None` 으로 남는다.
    pub fn sweep(&self, symbol: &str, cutoffs: &[f64]) -> Result<Vec<SweepPoint>> {
        let resolved = cutoffs
            .iter()
            .map(|&c| self.config.resolve_cutoff(c))
            .collect::<Result<Vec<f64>>>()?;

        resolved
            .par_iter()
            .map(|&cutoff| self.evaluate(symbol, cutoff).map(|r| SweepPoint::from(&r)))
            .collect()
    }

    /// 소스의 모든 글자를 같은 컷오프로 렌더링 (심볼 순)
    pub fn render_all(&self, cutoff: f64) -> Result<Vec<CompressionResult>> {
        let symbols = self.source.symbols();
        symbols
            .par_iter()
            .map(|symbol| self.render(&symbol.to_string(), cutoff))
            .collect()
    }

    /// 정책 검사 없이 파이프라인 실행. 퇴화 시 압축률은 무한대.
    fn evaluate(&self, symbol: &str, cutoff: f64) -> Result<CompressionResult> {
        let glyph = self.source.lookup(symbol)?;
        let original = glyph.to_matrix();
        let transformed = self.engine.forward2d(&original)?;
        let (quantized, retained) = quantize(&transformed, cutoff);
        let reconstructed = self.engine.inverse2d(&quantized)?;

        let total = transformed.len();
        let rate = compression_rate(total, retained).unwrap_or(f64::INFINITY);
        debug!(
            "symbol {:?} cutoff {:.3}: retained {}/{} rate {:.3}",
            symbol, cutoff, retained, total, rate
        );

        Ok(CompressionResult {
            // lookup 이 성공했으면 정확히 한 글자
            symbol: symbol.chars().next().unwrap_or_default(),
            cutoff,
            original,
            transformed,
            quantized,
            reconstructed,
            retained,
            compression_rate: rate,
        })
    }
}
