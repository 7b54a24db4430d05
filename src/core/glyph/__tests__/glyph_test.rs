use crate::core::error::GlyphDctError;
use crate::core::glyph::{Glyph, GlyphSource, GlyphTable, GLYPH_SIZE};

const A_ROWS: [&str; 8] = [
    "00000000", "00000000", "00111100", "00000010", "00111110", "01000010", "01000110",
    "00111011",
];

#[test]
fn 내장_테이블_26글자_테스트() {
    let source = GlyphSource::builtin();
    let symbols = source.symbols();
    assert_eq!(symbols.len(), 26);
    assert_eq!(symbols.first(), Some(&'a'));
    assert_eq!(symbols.last(), Some(&'z'));
    for symbol in 'a'..='z' {
        assert!(source.contains(symbol), "{} 누락", symbol);
    }
}

#[test]
fn 비트_문자열_파싱_테스트() {
    let parsed = Glyph::from_bit_strings(&A_ROWS[..]).unwrap();
    let builtin = GlyphSource::builtin().lookup("a").unwrap();
    assert_eq!(&parsed, builtin);
    assert!(parsed.pixel(7, 7));
    assert!(!parsed.pixel(0, 0));
    assert_eq!(parsed.ink_count(), 20);
}

#[test]
fn to_matrix_is_binary_8x8() {
    for symbol in 'a'..='z' {
        let glyph = GlyphSource::builtin().get(symbol).unwrap();
        let m = glyph.to_matrix();
        assert_eq!(m.dim(), (GLYPH_SIZE, GLYPH_SIZE));
        assert!(m.iter().all(|&v| v == 0.0 || v == 1.0));
        assert_eq!(m.sum() as usize, glyph.ink_count());
        assert!(glyph.ink_count() > 0, "{} 글리프가 비어 있음", symbol);
    }
}

#[test]
fn lookup_is_deterministic() {
    let source = GlyphSource::builtin();
    let first = *source.lookup("q").unwrap();
    let second = *source.lookup("q").unwrap();
    assert_eq!(first, second);
}

#[test]
fn 알_수_없는_심볼_테스트() {
    let source = GlyphSource::builtin();
    for bad in ["1", "A", "", "ab", "é"] {
        match source.lookup(bad) {
            Err(GlyphDctError::UnknownSymbol(s)) => assert_eq!(s, bad),
            other => panic!("{:?} 에 대해 UnknownSymbol 이 아님: {:?}", bad, other),
        }
    }
}

#[test]
fn 잘못된_글리프_거부_테스트() {
    let short = ["00000000"; 7];
    assert!(matches!(
        Glyph::from_bit_strings(&short[..]),
        Err(GlyphDctError::InvalidGlyph(_))
    ));

    let mut wide = A_ROWS.map(String::from);
    wide[3] = "000000001".to_string();
    assert!(matches!(
        Glyph::from_bit_strings(&wide[..]),
        Err(GlyphDctError::InvalidGlyph(_))
    ));

    let mut bad_char = A_ROWS.map(String::from);
    bad_char[0] = "0000x000".to_string();
    assert!(matches!(
        Glyph::from_bit_strings(&bad_char[..]),
        Err(GlyphDctError::InvalidGlyph(_))
    ));
}

#[test]
fn injected_table_replaces_builtin() {
    let solid = Glyph::from_rows([0xFF; GLYPH_SIZE]);
    let table: GlyphTable = [('#', solid)].into_iter().collect();
    let source = GlyphSource::new(table);

    assert_eq!(source.symbols(), vec!['#']);
    assert_eq!(source.lookup("#").unwrap().ink_count(), 64);
    assert!(source.lookup("a").is_err());
}

#[test]
fn json_table_parsing() {
    let json = r#"{
        "x": ["10000001","01000010","00100100","00011000","00011000","00100100","01000010","10000001"]
    }"#;
    let table = GlyphTable::from_json(json).unwrap();
    assert_eq!(table.len(), 1);
    let x = table.get('x').unwrap();
    assert!(x.pixel(0, 0) && x.pixel(0, 7) && x.pixel(3, 3));

    let bad_key = r#"{ "xy": ["00000000","00000000","00000000","00000000","00000000","00000000","00000000","00000000"] }"#;
    assert!(matches!(
        GlyphTable::from_json(bad_key),
        Err(GlyphDctError::InvalidGlyph(_))
    ));

    assert!(matches!(
        GlyphTable::from_json("not json"),
        Err(GlyphDctError::Json(_))
    ));
}
