//! 렌더링 결과를 JSON 으로 제공하는 HTTP 서버

pub mod api_server;

#[cfg(test)]
mod __tests__;

pub use api_server::*;
