use std::net::IpAddr;
use std::sync::Arc;

use anyhow::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::core::error::GlyphDctError;
use crate::core::pipeline::CompressionPipeline;
use crate::core::report::RenderSummary;

/// 서버 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            enable_cors: true,
        }
    }
}

/// `GET /render/{symbol}` 쿼리
#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    #[serde(default)]
    pub cutoff: f64,
}

#[derive(Debug, Serialize)]
pub struct LettersResponse {
    pub letters: Vec<char>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// API 서버. 파이프라인은 불변이므로 락 없이 공유.
pub struct DctApiServer {
    pipeline: Arc<CompressionPipeline>,
    config: ServerConfig,
}

impl DctApiServer {
    pub fn new(pipeline: CompressionPipeline, config: ServerConfig) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            config,
        }
    }

    /// 서버 시작
    pub async fn start(self) -> Result<()> {
        let addr = (self.config.host.parse::<IpAddr>()?, self.config.port);
        info!(
            "listening on http://{}:{} (cors: {})",
            self.config.host, self.config.port, self.config.enable_cors
        );

        let routes = routes(self.pipeline.clone());
        if self.config.enable_cors {
            let cors = warp::cors()
                .allow_any_origin()
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET"]);
            warp::serve(routes.with(cors)).run(addr).await;
        } else {
            warp::serve(routes).run(addr).await;
        }

        Ok(())
    }
}

/// 라우트 설정
pub fn routes(
    pipeline: Arc<CompressionPipeline>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    // 헬스체크
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| {
            warp::reply::json(&serde_json::json!({
                "status": "healthy",
                "service": "glyph DCT server"
            }))
        });

    let letters = warp::path("letters")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_pipeline(pipeline.clone()))
        .map(|pipeline: Arc<CompressionPipeline>| {
            warp::reply::json(&LettersResponse {
                letters: pipeline.source().symbols(),
            })
        });

    let render = warp::path!("render" / String)
        .and(warp::get())
        .and(warp::query::<RenderQuery>())
        .and(with_pipeline(pipeline))
        .and_then(render_symbol);

    health.or(letters).or(render)
}

async fn render_symbol(
    symbol: String,
    query: RenderQuery,
    pipeline: Arc<CompressionPipeline>,
) -> Result<impl Reply, Rejection> {
    debug!("render request: {:?} cutoff {}", symbol, query.cutoff);

    let reply = match pipeline.render(&symbol, query.cutoff) {
        Ok(result) => warp::reply::with_status(
            warp::reply::json(&RenderSummary::from(&result)),
            StatusCode::OK,
        ),
        Err(err) => {
            let status = status_for(&err);
            debug!("render {:?} failed: {}", symbol, err);
            warp::reply::with_status(
                warp::reply::json(&ErrorResponse {
                    error: err.to_string(),
                    code: status.as_u16(),
                }),
                status,
            )
        }
    };
    Ok(reply)
}

/// 에러 종류별 HTTP 상태
pub fn status_for(err: &GlyphDctError) -> StatusCode {
    match err {
        GlyphDctError::UnknownSymbol(_) => StatusCode::NOT_FOUND,
        GlyphDctError::InvalidParameter { .. } | GlyphDctError::DegenerateCompression { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 파이프라인 의존성 주입을 위한 헬퍼
fn with_pipeline(
    pipeline: Arc<CompressionPipeline>,
) -> impl Filter<Extract = (Arc<CompressionPipeline>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || pipeline.clone())
}
