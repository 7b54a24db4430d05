//! 정사각 행렬용 2D 코사인 변환

pub mod dct;


pub use dct::TransformEngine;
