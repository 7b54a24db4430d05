use std::sync::Arc;

use warp::http::StatusCode;

use crate::core::error::GlyphDctError;
use crate::core::glyph::{Glyph, GlyphSource, GlyphTable};
use crate::core::pipeline::{CompressionPipeline, PipelineConfig};
use crate::server::{routes, status_for, ServerConfig};

fn default_pipeline() -> Arc<CompressionPipeline> {
    Arc::new(CompressionPipeline::with_defaults().unwrap())
}

fn body_json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn health_check() {
    let filter = routes(default_pipeline());
    let res = warp::test::request().method("GET").path("/health").reply(&filter).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res.body())["status"], "healthy");
}

#[tokio::test]
async fn 글자_목록() {
    let filter = routes(default_pipeline());
    let res = warp::test::request().method("GET").path("/letters").reply(&filter).await;

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res.body());
    let letters = json["letters"].as_array().unwrap();
    assert_eq!(letters.len(), 26);
    assert_eq!(letters[0], "a");
}

#[tokio::test]
async fn render_returns_matrices() {
    let filter = routes(default_pipeline());
    let res = warp::test::request()
        .method("GET")
        .path("/render/a?cutoff=0.5")
        .reply(&filter)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res.body());
    assert_eq!(json["symbol"], "a");
    assert_eq!(json["total"], 64);
    assert!(json["retained"].as_u64().unwrap() < 64);
    assert!(json["compression_rate"].as_f64().unwrap() > 1.0);
    assert_eq!(json["reconstructed"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn cutoff_defaults_to_zero() {
    let filter = routes(default_pipeline());
    let res = warp::test::request().method("GET").path("/render/a").reply(&filter).await;

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res.body());
    assert_eq!(json["cutoff"], 0.0);
    assert_eq!(json["compression_rate"], 1.0);
}

#[tokio::test]
async fn 에러_상태_코드() {
    let filter = routes(default_pipeline());

    let res = warp::test::request().method("GET").path("/render/1?cutoff=0.1").reply(&filter).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(res.body())["code"], 404);

    let res = warp::test::request().method("GET").path("/render/a?cutoff=1.5").reply(&filter).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn degenerate_render_is_unprocessable() {
    // 한 픽셀 글리프: 모든 계수 크기가 0.25 이하
    let mut dot = [0u8; 8];
    dot[3] = 0b0001_0000;
    let table: GlyphTable = [('x', Glyph::from_rows(dot))].into_iter().collect();
    let pipeline = CompressionPipeline::new(GlyphSource::new(table), PipelineConfig::strict()).unwrap();
    let filter = routes(Arc::new(pipeline));

    let res = warp::test::request().method("GET").path("/render/x?cutoff=0.5").reply(&filter).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(res.body())["code"], 422);

    let res = warp::test::request().method("GET").path("/render/x?cutoff=0.0").reply(&filter).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[test]
fn status_mapping() {
    assert_eq!(
        status_for(&GlyphDctError::DegenerateCompression { cutoff: 0.2 }),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        status_for(&GlyphDctError::InvalidGlyph("x".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn default_config_matches_dev_server() {
    let config = ServerConfig::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8050);
    assert!(config.enable_cors);
}
