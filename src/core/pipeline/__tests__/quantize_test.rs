use ndarray::array;

use crate::core::pipeline::{compression_rate, count_retained, linear_cutoffs, quantize};

#[test]
fn 컷오프_미만만_제거() {
    let coeffs = array![[2.0, -0.3], [0.5, -0.5]];
    let (quant, retained) = quantize(&coeffs, 0.5);

    // |v| < cutoff 만 0, 경계값은 유지
    assert_eq!(quant, array![[2.0, 0.0], [0.5, -0.5]]);
    assert_eq!(retained, 3);
}

#[test]
fn zero_cutoff_keeps_everything() {
    let coeffs = array![[1.0, -1e-12], [0.0, 3.0]];
    let (quant, retained) = quantize(&coeffs, 0.0);

    assert_eq!(quant, coeffs);
    // 원래부터 0인 항목은 세지 않음
    assert_eq!(retained, 3);
}

#[test]
fn negative_coefficients_count_as_retained() {
    let coeffs = array![[-1.0, -2.0], [-3.0, -4.0]];
    assert_eq!(count_retained(&coeffs), 4);
    assert_eq!(count_retained(&array![[0.0, -0.0], [0.0, 0.0]]), 0);
}

#[test]
fn cutoff_above_max_suppresses_all() {
    let coeffs = array![[0.9, -0.2], [0.1, 0.05]];
    let (quant, retained) = quantize(&coeffs, 0.95);
    assert!(quant.iter().all(|&v| v == 0.0));
    assert_eq!(retained, 0);
}

#[test]
fn 압축률_계산() {
    assert_eq!(compression_rate(64, 64), Some(1.0));
    assert_eq!(compression_rate(64, 16), Some(4.0));
    assert_eq!(compression_rate(64, 0), None);
}

#[test]
fn linear_cutoffs_cover_unit_interval() {
    let cutoffs = linear_cutoffs(4);
    assert_eq!(cutoffs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(linear_cutoffs(0), vec![0.0, 1.0]);
}
