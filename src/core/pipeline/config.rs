//! 파이프라인 설정 - 컷오프 범위 처리와 퇴화(전부 제거) 처리 정책

use serde::{Deserialize, Serialize};

use crate::core::error::{GlyphDctError, Result};

/// [0, 1] 범위 밖 컷오프 처리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CutoffPolicy {
    /// `InvalidParameter` 로 거부
    #[default]
    Reject,
    /// 범위 안으로 클램핑
    Clamp,
}

/// 유지 계수가 0개일 때의 처리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DegeneratePolicy {
    /// `DegenerateCompression` 에러
    #[default]
    Reject,
    /// 압축률을 무한대로 보고
    Infinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub cutoff_policy: CutoffPolicy,
    pub degenerate_policy: DegeneratePolicy,
}

impl PipelineConfig {
    /// 기본값: 범위 밖 컷오프 거부, 퇴화 결과 거부
    pub fn strict() -> Self {
        Self::default()
    }

    /// 슬라이더 UI 처럼 관대한 설정: 클램핑 + 무한 압축률
    pub fn lenient() -> Self {
        Self {
            cutoff_policy: CutoffPolicy::Clamp,
            degenerate_policy: DegeneratePolicy::Infinite,
        }
    }

    /// 정책에 따라 실제로 사용할 컷오프 결정. NaN 은 항상 거부.
    pub fn resolve_cutoff(&self, cutoff: f64) -> Result<f64> {
        if cutoff.is_nan() {
            return Err(GlyphDctError::InvalidParameter {
                name: "cutoff",
                value: cutoff,
                reason: "cutoff must be a number",
            });
        }
        if (0.0..=1.0).contains(&cutoff) {
            return Ok(cutoff);
        }
        match self.cutoff_policy {
            CutoffPolicy::Clamp => Ok(cutoff.clamp(0.0, 1.0)),
            CutoffPolicy::Reject => Err(GlyphDctError::InvalidParameter {
                name: "cutoff",
                value: cutoff,
                reason: "cutoff must lie in [0, 1]",
            }),
        }
    }
}
