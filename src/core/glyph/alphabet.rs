//! 내장 소문자 알파벳 비트맵
//!
//! 각 글리프는 8개의 행 바이트로 표현되며, 최상위 비트가 가장 왼쪽 픽셀이다.

/// 글리프 한 변의 픽셀 수
pub const GLYPH_SIZE: usize = 8;

/// 'a'..='z' 순서의 8×8 비트맵
pub const LOWERCASE: [[u8; GLYPH_SIZE]; 26] = [
    // a
    [
        0b0000_0000,
        0b0000_0000,
        0b0011_1100,
        0b0000_0010,
        0b0011_1110,
        0b0100_0010,
        0b0100_0110,
        0b0011_1011,
    ],
    // b
    [
        0b0100_0000,
        0b0100_0000,
        0b0101_1100,
        0b0110_0010,
        0b0100_0010,
        0b0100_0010,
        0b0110_0010,
        0b0101_1100,
    ],
    // c
    [
        0b0000_0000,
        0b0000_0000,
        0b0011_1100,
        0b0100_0010,
        0b0100_0000,
        0b0100_0000,
        0b0100_0010,
        0b0011_1100,
    ],
    // d
    [
        0b0000_0010,
        0b0000_0010,
        0b0011_1010,
        0b0100_0110,
        0b0100_0010,
        0b0100_0010,
        0b0100_0110,
        0b0011_1010,
    ],
    // e
    [
        0b0000_0000,
        0b0000_0000,
        0b0011_1100,
        0b0100_0010,
        0b0111_1110,
        0b0100_0000,
        0b0100_0010,
        0b0011_1100,
    ],
    // f
    [
        0b0000_1100,
        0b0001_0010,
        0b0001_0000,
        0b0111_1100,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
    ],
    // g
    [
        0b0000_0000,
        0b0011_1010,
        0b0100_0110,
        0b0100_0010,
        0b0011_1110,
        0b0000_0010,
        0b0100_0010,
        0b0011_1100,
    ],
    // h
    [
        0b0100_0000,
        0b0100_0000,
        0b0101_1100,
        0b0110_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
    ],
    // i
    [
        0b0001_0000,
        0b0000_0000,
        0b0011_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0011_1000,
    ],
    // j
    [
        0b0000_0100,
        0b0000_0000,
        0b0000_1100,
        0b0000_0100,
        0b0000_0100,
        0b0000_0100,
        0b0100_0100,
        0b0011_1000,
    ],
    // k
    [
        0b0100_0000,
        0b0100_0000,
        0b0100_0100,
        0b0100_1000,
        0b0111_0000,
        0b0100_1000,
        0b0100_0100,
        0b0100_0010,
    ],
    // l
    [
        0b0011_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0011_1000,
    ],
    // m
    [
        0b0000_0000,
        0b0000_0000,
        0b0110_1100,
        0b0101_0010,
        0b0101_0010,
        0b0101_0010,
        0b0101_0010,
        0b0101_0010,
    ],
    // n
    [
        0b0000_0000,
        0b0000_0000,
        0b0101_1100,
        0b0110_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
    ],
    // o
    [
        0b0000_0000,
        0b0000_0000,
        0b0011_1100,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0011_1100,
    ],
    // p
    [
        0b0000_0000,
        0b0101_1100,
        0b0110_0010,
        0b0100_0010,
        0b0110_0010,
        0b0101_1100,
        0b0100_0000,
        0b0100_0000,
    ],
    // q
    [
        0b0000_0000,
        0b0011_1010,
        0b0100_0110,
        0b0100_0010,
        0b0100_0110,
        0b0011_1010,
        0b0000_0010,
        0b0000_0010,
    ],
    // r
    [
        0b0000_0000,
        0b0000_0000,
        0b0101_1100,
        0b0110_0010,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
    ],
    // s
    [
        0b0000_0000,
        0b0000_0000,
        0b0011_1110,
        0b0100_0000,
        0b0011_1100,
        0b0000_0010,
        0b0000_0010,
        0b0111_1100,
    ],
    // t
    [
        0b0001_0000,
        0b0001_0000,
        0b0111_1100,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0010,
        0b0000_1100,
    ],
    // u
    [
        0b0000_0000,
        0b0000_0000,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0110,
        0b0011_1010,
    ],
    // v
    [
        0b0000_0000,
        0b0000_0000,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0010_0100,
        0b0010_0100,
        0b0001_1000,
    ],
    // w
    [
        0b0000_0000,
        0b0000_0000,
        0b0100_0001,
        0b0100_0001,
        0b0100_1001,
        0b0100_1001,
        0b0101_0101,
        0b0010_0010,
    ],
    // x
    [
        0b0000_0000,
        0b0000_0000,
        0b0100_0010,
        0b0010_0100,
        0b0001_1000,
        0b0001_1000,
        0b0010_0100,
        0b0100_0010,
    ],
    // y
    [
        0b0000_0000,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0011_1110,
        0b0000_0010,
        0b0100_0010,
        0b0011_1100,
    ],
    // z
    [
        0b0000_0000,
        0b0000_0000,
        0b0111_1110,
        0b0000_0100,
        0b0000_1000,
        0b0001_0000,
        0b0010_0000,
        0b0111_1110,
    ],
];
