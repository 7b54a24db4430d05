//! 정규직교(orthonormal) 2차원 DCT-II / DCT-III
//!
//! rustdct 의 DCT-II 는 스케일링이 없는 합 `X[k] = Σ x[n]·cos(π(2n+1)k / 2N)` 이고,
//! DCT-III 는 `x[n] = X[0]/2 + Σ X[k]·cos(π(2n+1)k / 2N)` 이다.
//! 여기서는 각 기저 벡터의 노름이 1이 되도록 계수를 재조정해서
//! 에너지 보존(Parseval)과 정확한 역변환을 보장한다.

use std::sync::Arc;

use ndarray::{Array2, ArrayViewMut1, Axis};
use rustdct::{Dct2, Dct3, DctPlanner, TransformType2And3};

use crate::core::error::{GlyphDctError, Result};
use crate::core::Matrix;

/// 정사각 행렬에 대한 순방향/역방향 2D DCT 엔진
#[derive(Clone)]
pub struct TransformEngine {
    len: usize,
    dct: Arc<dyn TransformType2And3<f64>>,
    /// k = 0 계수 스케일 sqrt(1/N)
    dc_scale: f64,
    /// k ≥ 1 계수 스케일 sqrt(2/N)
    ac_scale: f64,
}

impl std::fmt::Debug for TransformEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformEngine")
            .field("len", &self.len)
            .finish()
    }
}

impl TransformEngine {
    /// 길이 `len` 의 DCT 를 한 번 계획해두고 재사용
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(GlyphDctError::InvalidParameter {
                name: "len",
                value: 0.0,
                reason: "transform length must be at least 1",
            });
        }

        // planner는 계획 시에만 필요
        let mut planner = DctPlanner::<f64>::new();
        let dct = planner.plan_dct2(len);
        let n = len as f64;

        Ok(Self {
            len,
            dct,
            dc_scale: (1.0 / n).sqrt(),
            ac_scale: (2.0 / n).sqrt(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// 1D 정규직교 DCT-II (제자리 연산)
    pub fn forward1d(&self, lane: &mut [f64]) -> Result<()> {
        self.check_lane(lane.len())?;
        self.dct.process_dct2(lane);
        self.scale_forward(lane);
        Ok(())
    }

    /// 1D 정규직교 DCT-III, `forward1d` 의 역변환 (제자리 연산)
    pub fn inverse1d(&self, lane: &mut [f64]) -> Result<()> {
        self.check_lane(lane.len())?;
        self.scale_inverse(lane);
        self.dct.process_dct3(lane);
        Ok(())
    }

    /// 행 방향, 열 방향 순서로 1D DCT-II 적용
    pub fn forward2d(&self, matrix: &Matrix) -> Result<Matrix> {
        self.check_shape(matrix)?;
        let mut out = matrix.to_owned();
        self.apply_lanes(&mut out, Axis(0), |engine, buf| {
            engine.dct.process_dct2(buf);
            engine.scale_forward(buf);
        });
        self.apply_lanes(&mut out, Axis(1), |engine, buf| {
            engine.dct.process_dct2(buf);
            engine.scale_forward(buf);
        });
        Ok(out)
    }

    /// `forward2d` 의 정확한 역변환
    pub fn inverse2d(&self, coeffs: &Matrix) -> Result<Matrix> {
        self.check_shape(coeffs)?;
        let mut out = coeffs.to_owned();
        self.apply_lanes(&mut out, Axis(0), |engine, buf| {
            engine.scale_inverse(buf);
            engine.dct.process_dct3(buf);
        });
        self.apply_lanes(&mut out, Axis(1), |engine, buf| {
            engine.scale_inverse(buf);
            engine.dct.process_dct3(buf);
        });
        Ok(out)
    }

    fn scale_forward(&self, buf: &mut [f64]) {
        buf[0] *= self.dc_scale;
        buf[1..].iter_mut().for_each(|v| *v *= self.ac_scale);
    }

    // rustdct DCT-III 는 X[0]/2 를 쓰므로 DC 항은 2·sqrt(1/N) 배
    fn scale_inverse(&self, buf: &mut [f64]) {
        buf[0] *= 2.0 * self.dc_scale;
        buf[1..].iter_mut().for_each(|v| *v *= self.ac_scale);
    }

    /// `axis` 방향의 각 lane 을 버퍼로 복사해 변환 후 되돌려 씀.
    /// Axis(0) 은 행 단위(각 행을 따라), Axis(1) 은 열 단위.
    fn apply_lanes<F>(&self, matrix: &mut Array2<f64>, axis: Axis, op: F)
    where
        F: Fn(&Self, &mut [f64]),
    {
        let mut buf = vec![0.0; self.len];
        let lanes = match axis {
            Axis(0) => matrix.rows_mut().into_iter().collect::<Vec<ArrayViewMut1<f64>>>(),
            _ => matrix.columns_mut().into_iter().collect::<Vec<ArrayViewMut1<f64>>>(),
        };
        for mut lane in lanes {
            for (b, v) in buf.iter_mut().zip(lane.iter()) {
                *b = *v;
            }
            op(self, buf.as_mut_slice());
            for (v, b) in lane.iter_mut().zip(buf.iter()) {
                *v = *b;
            }
        }
    }

    fn check_lane(&self, len: usize) -> Result<()> {
        if len != self.len {
            return Err(GlyphDctError::DimensionMismatch {
                expected: (self.len, 1),
                actual: (len, 1),
            });
        }
        Ok(())
    }

    fn check_shape(&self, matrix: &Matrix) -> Result<()> {
        if matrix.dim() != (self.len, self.len) {
            return Err(GlyphDctError::DimensionMismatch {
                expected: (self.len, self.len),
                actual: matrix.dim(),
            });
        }
        Ok(())
    }
}
