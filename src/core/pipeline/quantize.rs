use crate::core::Matrix;

/// 절댓값이 `cutoff` 보다 작은 계수를 정확히 0으로 만든 사본과 유지 계수 개수
pub fn quantize(coeffs: &Matrix, cutoff: f64) -> (Matrix, usize) {
    let quant = coeffs.mapv(|v| if v.abs() < cutoff { 0.0 } else { v });
    let retained = count_retained(&quant);
    (quant, retained)
}

/// 정확히 0이 아닌 항목 수 (-0.0 도 0으로 취급)
pub fn count_retained(coeffs: &Matrix) -> usize {
    coeffs.iter().filter(|&&v| v != 0.0).count()
}

/// 전체 계수 수 / 유지 계수 수. 유지 계수가 없으면 `None`.
pub fn compression_rate(total: usize, retained: usize) -> Option<f64> {
    if retained == 0 {
        None
    } else {
        Some(total as f64 / retained as f64)
    }
}

/// 0부터 1까지 `steps` 구간으로 나눈 컷오프 목록 (양 끝 포함)
pub fn linear_cutoffs(steps: usize) -> Vec<f64> {
    let steps = steps.max(1);
    (0..=steps).map(|i| i as f64 / steps as f64).collect()
}
