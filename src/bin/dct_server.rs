use clap::{Arg, ArgAction, Command};
use glyph_dct::server::{DctApiServer, ServerConfig};
use glyph_dct::{CompressionPipeline, GlyphSource, PipelineConfig};
use log::info;
use std::process;

#[tokio::main]
async fn main() {
    // 로거 초기화
    env_logger::init();

    let defaults = ServerConfig::default();

    // 명령행 인자 파싱
    let matches = Command::new("glyph DCT server")
        .version("0.1.0")
        .about("글자 DCT 압축 결과를 JSON 으로 제공하는 API 서버")
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .help("서버 호스트 주소")
                .default_value("127.0.0.1"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .value_name("PORT")
                .help("서버 포트 번호")
                .value_parser(clap::value_parser!(u16))
                .default_value("8050"),
        )
        .arg(
            Arg::new("no-cors")
                .long("no-cors")
                .help("CORS 비활성화")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("clamp")
                .long("clamp")
                .help("범위 밖 컷오프를 클램핑하고 퇴화 결과도 반환")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("alphabet")
                .long("alphabet")
                .short('a')
                .value_name("FILE")
                .help("글리프 테이블 JSON 파일"),
        )
        .get_matches();

    let config = ServerConfig {
        host: matches
            .get_one::<String>("host")
            .cloned()
            .unwrap_or(defaults.host),
        port: matches.get_one::<u16>("port").copied().unwrap_or(defaults.port),
        enable_cors: !matches.get_flag("no-cors"),
    };

    let source = match matches.get_one::<String>("alphabet") {
        Some(path) => match GlyphSource::from_json_file(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("글리프 테이블 로드 실패 ({}): {}", path, e);
                process::exit(1);
            }
        },
        None => GlyphSource::default(),
    };
    let pipeline_config = if matches.get_flag("clamp") {
        PipelineConfig::lenient()
    } else {
        PipelineConfig::strict()
    };
    let pipeline = match CompressionPipeline::new(source, pipeline_config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("파이프라인 생성 실패: {}", e);
            process::exit(1);
        }
    };

    info!("{} glyphs loaded, config {:?}", pipeline.source().symbols().len(), pipeline_config);
    println!("API 엔드포인트:");
    println!("   GET  /health                    - 헬스체크");
    println!("   GET  /letters                   - 지원 글자 목록");
    println!("   GET  /render/{{symbol}}?cutoff=x  - 압축/복원 결과");

    // 서버 시작
    let server = DctApiServer::new(pipeline, config);
    if let Err(e) = server.start().await {
        eprintln!("서버 시작 실패: {}", e);
        process::exit(1);
    }
}
