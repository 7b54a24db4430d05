use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use ndarray::Array2;
use once_cell::sync::Lazy;

use super::alphabet::{GLYPH_SIZE, LOWERCASE};
use crate::core::error::{GlyphDctError, Result};
use crate::core::Matrix;

// 내장 테이블은 읽기 전용이므로 락 없이 공유
static BUILTIN: Lazy<GlyphSource> = Lazy::new(|| GlyphSource::new(GlyphTable::lowercase()));

/// 8×8 이진 글리프
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    rows: [u8; GLYPH_SIZE],
}

impl Glyph {
    pub const fn from_rows(rows: [u8; GLYPH_SIZE]) -> Self {
        Self { rows }
    }

    /// `"00111100"` 형태의 문자열 8줄로부터 글리프 생성
    pub fn from_bit_strings<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        if lines.len() != GLYPH_SIZE {
            return Err(GlyphDctError::InvalidGlyph(format!(
                "expected {} rows, got {}",
                GLYPH_SIZE,
                lines.len()
            )));
        }

        let mut rows = [0u8; GLYPH_SIZE];
        for (r, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != GLYPH_SIZE {
                return Err(GlyphDctError::InvalidGlyph(format!(
                    "row {} has width {}, expected {}",
                    r,
                    line.chars().count(),
                    GLYPH_SIZE
                )));
            }
            for ch in line.chars() {
                let bit = match ch {
                    '0' => 0,
                    '1' => 1,
                    other => {
                        return Err(GlyphDctError::InvalidGlyph(format!(
                            "row {} contains {:?}, only '0' and '1' are allowed",
                            r, other
                        )))
                    }
                };
                rows[r] = (rows[r] << 1) | bit;
            }
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[u8; GLYPH_SIZE] {
        &self.rows
    }

    pub fn pixel(&self, row: usize, col: usize) -> bool {
        self.rows[row] & (0x80 >> col) != 0
    }

    /// 켜진 픽셀 수
    pub fn ink_count(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    pub fn to_matrix(&self) -> Matrix {
        Array2::from_shape_fn((GLYPH_SIZE, GLYPH_SIZE), |(r, c)| {
            if self.pixel(r, c) {
                1.0
            } else {
                0.0
            }
        })
    }
}

/// 심볼 → 글리프 매핑 (외부에서 주입 가능한 데이터 자산)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphTable {
    glyphs: BTreeMap<char, Glyph>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 내장 소문자 'a'..='z' 테이블
    pub fn lowercase() -> Self {
        ('a'..='z')
            .zip(LOWERCASE.iter())
            .map(|(symbol, rows)| (symbol, Glyph::from_rows(*rows)))
            .collect()
    }

    /// `{"a": ["00000000", ...], ...}` 형식의 JSON 파싱
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(text)?;
        let mut table = Self::new();

        for (key, lines) in raw {
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(GlyphDctError::InvalidGlyph(format!(
                        "key {:?} must be a single character",
                        key
                    )))
                }
            };
            let glyph = Glyph::from_bit_strings(&lines[..]).map_err(|e| match e {
                GlyphDctError::InvalidGlyph(msg) => {
                    GlyphDctError::InvalidGlyph(format!("symbol {:?}: {}", symbol, msg))
                }
                other => other,
            })?;
            table.insert(symbol, glyph);
        }

        Ok(table)
    }

    pub fn insert(&mut self, symbol: char, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(symbol, glyph)
    }

    pub fn get(&self, symbol: char) -> Option<&Glyph> {
        self.glyphs.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }
}

impl FromIterator<(char, Glyph)> for GlyphTable {
    fn from_iter<I: IntoIterator<Item = (char, Glyph)>>(iter: I) -> Self {
        Self {
            glyphs: iter.into_iter().collect(),
        }
    }
}

/// 심볼을 글리프로 해석하는 읽기 전용 소스
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSource {
    table: GlyphTable,
}

impl GlyphSource {
    pub fn new(table: GlyphTable) -> Self {
        Self { table }
    }

    /// 프로세스 전역 내장 소스
    pub fn builtin() -> &'static GlyphSource {
        &BUILTIN
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let table = GlyphTable::from_json(&text)?;
        debug!("loaded {} glyphs from {}", table.len(), path.display());
        Ok(Self::new(table))
    }

    /// 한 글자 심볼 조회. 빈 문자열이나 여러 글자는 `UnknownSymbol`.
    pub fn lookup(&self, symbol: &str) -> Result<&Glyph> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self
                .table
                .get(c)
                .ok_or_else(|| GlyphDctError::UnknownSymbol(symbol.to_string())),
            _ => Err(GlyphDctError::UnknownSymbol(symbol.to_string())),
        }
    }

    pub fn get(&self, symbol: char) -> Option<&Glyph> {
        self.table.get(symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.table.get(symbol).is_some()
    }

    /// 정렬된 심볼 목록
    pub fn symbols(&self) -> Vec<char> {
        self.table.symbols().collect()
    }

    pub fn table(&self) -> &GlyphTable {
        &self.table
    }
}

impl Default for GlyphSource {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
