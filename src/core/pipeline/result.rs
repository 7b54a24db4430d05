use serde::Serialize;

use crate::core::Matrix;

/// `render` 한 번의 결과 묶음
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionResult {
    pub symbol: char,
    /// 정책 적용 후 실제로 사용된 컷오프
    pub cutoff: f64,
    pub original: Matrix,
    /// 순방향 DCT 계수
    pub transformed: Matrix,
    /// 컷오프 적용 후 계수
    pub quantized: Matrix,
    pub reconstructed: Matrix,
    /// 0이 아닌 양자화 계수 개수
    pub retained: usize,
    /// 전체 계수 수 / `retained`. 퇴화 결과를 허용한 경우 무한대.
    pub compression_rate: f64,
}

impl CompressionResult {
    pub fn total_coefficients(&self) -> usize {
        self.transformed.len()
    }

    pub fn is_degenerate(&self) -> bool {
        self.retained == 0
    }

    pub fn max_abs_error(&self) -> f64 {
        self.original
            .iter()
            .zip(self.reconstructed.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    pub fn rmse(&self) -> f64 {
        let mse = self
            .original
            .iter()
            .zip(self.reconstructed.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            / self.original.len() as f64;
        mse.sqrt()
    }

    /// 최대값 1.0 기준 PSNR (dB). 완전 복원이면 무한대.
    pub fn psnr(&self) -> f64 {
        let rmse = self.rmse();
        if rmse == 0.0 {
            f64::INFINITY
        } else {
            20.0 * (1.0 / rmse).log10()
        }
    }

    /// 양자화 후 남은 계수 에너지 비율
    pub fn energy_retained(&self) -> f64 {
        let total: f64 = self.transformed.iter().map(|v| v * v).sum();
        if total == 0.0 {
            return 1.0;
        }
        let kept: f64 = self.quantized.iter().map(|v| v * v).sum();
        kept / total
    }

    pub fn is_lossless(&self, tolerance: f64) -> bool {
        self.max_abs_error() <= tolerance
    }
}

/// 컷오프 스윕의 한 지점
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub cutoff: f64,
    pub retained: usize,
    /// 퇴화 지점이면 `None`
    pub compression_rate: Option<f64>,
    pub rmse: f64,
}

impl From<&CompressionResult> for SweepPoint {
    fn from(result: &CompressionResult) -> Self {
        Self {
            cutoff: result.cutoff,
            retained: result.retained,
            compression_rate: (!result.is_degenerate()).then_some(result.compression_rate),
            rmse: result.rmse(),
        }
    }
}
