//! 결과 표시용 텍스트 렌더링과 직렬화 가능한 요약

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::pipeline::CompressionResult;
use crate::core::Matrix;

/// 복원 이미지를 이진 그림으로 볼 때의 기준값
pub const RECONSTRUCTION_THRESHOLD: f64 = 0.5;

/// 행마다 한 줄, `threshold` 이상은 `#`, 미만은 `.`
pub fn ascii_image(matrix: &Matrix, threshold: f64) -> String {
    let mut out = String::with_capacity(matrix.len() + matrix.nrows());
    for row in matrix.rows() {
        for &v in row {
            out.push(if v >= threshold { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

/// 1부터 시작하는 행/열 번호가 붙은 값 표
pub fn value_table(matrix: &Matrix, precision: usize) -> String {
    let width = (precision + 4).max(3);
    let mut out = String::new();

    let _ = write!(out, "{:>3}", "");
    for c in 1..=matrix.ncols() {
        let _ = write!(out, " {:>width$}", c, width = width);
    }
    out.push('\n');

    for (r, row) in matrix.rows().into_iter().enumerate() {
        let _ = write!(out, "{:>3}", r + 1);
        for &v in row {
            // -0.000 표시 방지
            let v = if v.abs() < 0.5 * 10f64.powi(-(precision as i32)) { 0.0 } else { v };
            let _ = write!(out, " {:>width$.prec$}", v, width = width, prec = precision);
        }
        out.push('\n');
    }
    out
}

/// 품질 보고서
pub fn summary(result: &CompressionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== '{}' cutoff {:.3} ===", result.symbol, result.cutoff);
    let _ = writeln!(
        out,
        "유지 계수: {}/{}",
        result.retained,
        result.total_coefficients()
    );
    if result.is_degenerate() {
        let _ = writeln!(out, "압축률: ∞ (모든 계수 제거)");
    } else {
        let _ = writeln!(out, "압축률: {:.3}:1", result.compression_rate);
    }
    let _ = writeln!(out, "RMSE: {:.6}", result.rmse());
    let psnr = result.psnr();
    if psnr.is_finite() {
        let _ = writeln!(out, "PSNR: {:.2} dB", psnr);
    } else {
        let _ = writeln!(out, "PSNR: ∞");
    }
    let _ = writeln!(out, "최대 오차: {:.6}", result.max_abs_error());
    let _ = writeln!(out, "에너지 유지율: {:.2}%", result.energy_retained() * 100.0);
    out
}

/// JSON 응답용 요약. 행렬은 행 배열의 배열.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSummary {
    pub symbol: char,
    pub cutoff: f64,
    pub retained: usize,
    pub total: usize,
    /// JSON 은 무한대를 표현하지 못하므로 퇴화 결과는 `null`
    pub compression_rate: Option<f64>,
    pub rmse: f64,
    pub max_abs_error: f64,
    pub energy_retained: f64,
    pub original: Vec<Vec<f64>>,
    pub transformed: Vec<Vec<f64>>,
    pub quantized: Vec<Vec<f64>>,
    pub reconstructed: Vec<Vec<f64>>,
}

impl From<&CompressionResult> for RenderSummary {
    fn from(result: &CompressionResult) -> Self {
        Self {
            symbol: result.symbol,
            cutoff: result.cutoff,
            retained: result.retained,
            total: result.total_coefficients(),
            compression_rate: result
                .compression_rate
                .is_finite()
                .then_some(result.compression_rate),
            rmse: result.rmse(),
            max_abs_error: result.max_abs_error(),
            energy_retained: result.energy_retained(),
            original: nested_rows(&result.original),
            transformed: nested_rows(&result.transformed),
            quantized: nested_rows(&result.quantized),
            reconstructed: nested_rows(&result.reconstructed),
        }
    }
}

pub fn nested_rows(matrix: &Matrix) -> Vec<Vec<f64>> {
    matrix.rows().into_iter().map(|row| row.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::CompressionPipeline;
    use ndarray::array;

    #[test]
    fn ascii_image_marks_ink() {
        let m = array![[1.0, 0.0], [0.4, 0.6]];
        assert_eq!(ascii_image(&m, 0.5), "#.\n.#\n");
    }

    #[test]
    fn 글리프_그림() {
        let result = CompressionPipeline::with_defaults()
            .unwrap()
            .render("a", 0.0)
            .unwrap();
        let art = ascii_image(&result.reconstructed, RECONSTRUCTION_THRESHOLD);
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[2], "..####..");
        assert_eq!(lines[7], "..###.##");
    }

    #[test]
    fn value_table_has_one_based_headers() {
        let m = array![[1.0, -0.00001], [0.25, 2.0]];
        let table = value_table(&m, 2);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), vec!["1", "2"]);
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            vec!["1", "1.00", "0.00"]
        );
        assert_eq!(
            lines[2].split_whitespace().collect::<Vec<_>>(),
            vec!["2", "0.25", "2.00"]
        );
    }

    #[test]
    fn summary_and_json_view() {
        let result = CompressionPipeline::with_defaults()
            .unwrap()
            .render("a", 0.5)
            .unwrap();
        let text = summary(&result);
        assert!(text.contains("'a'"));
        assert!(text.contains(&format!("{}/64", result.retained)));

        let view = RenderSummary::from(&result);
        assert_eq!(view.total, 64);
        assert_eq!(view.compression_rate, Some(result.compression_rate));
        assert_eq!(view.reconstructed.len(), 8);
        assert!(view.reconstructed.iter().all(|row| row.len() == 8));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["symbol"], "a");
        assert_eq!(json["retained"], result.retained);
    }
}
