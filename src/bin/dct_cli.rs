use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use glyph_dct::core::pipeline::linear_cutoffs;
use glyph_dct::core::report::{self, RenderSummary, RECONSTRUCTION_THRESHOLD};
use glyph_dct::{CompressionPipeline, GlyphSource, PipelineConfig};
use std::process;

fn alphabet_arg() -> Arg {
    Arg::new("alphabet")
        .long("alphabet")
        .short('a')
        .value_name("FILE")
        .help("글리프 테이블 JSON 파일 (기본: 내장 소문자)")
}

fn main() {
    env_logger::init();

    let matches = Command::new("glyph DCT CLI")
        .version("0.1.0")
        .about("8×8 글자 비트맵의 DCT 압축 시각화")
        .subcommand(
            Command::new("render")
                .about("한 글자를 압축하고 복원 결과 출력")
                .arg(Arg::new("symbol").required(true).help("글자 (예: a)"))
                .arg(
                    Arg::new("cutoff")
                        .long("cutoff")
                        .short('c')
                        .value_name("CUTOFF")
                        .help("계수 컷오프 (0.0-1.0)")
                        .default_value("0.0"),
                )
                .arg(
                    Arg::new("clamp")
                        .long("clamp")
                        .help("범위 밖 컷오프를 거부하지 않고 클램핑")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("precision")
                        .long("precision")
                        .short('p')
                        .value_name("DIGITS")
                        .help("표 소수점 자릿수")
                        .default_value("3"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("JSON 으로 출력")
                        .action(ArgAction::SetTrue),
                )
                .arg(alphabet_arg()),
        )
        .subcommand(
            Command::new("sweep")
                .about("컷오프를 0부터 1까지 바꾸며 압축률/RMSE 표 출력")
                .arg(Arg::new("symbol").required(true).help("글자 (예: a)"))
                .arg(
                    Arg::new("steps")
                        .long("steps")
                        .short('s')
                        .value_name("COUNT")
                        .help("구간 수")
                        .default_value("10"),
                )
                .arg(alphabet_arg()),
        )
        .subcommand(
            Command::new("letters")
                .about("지원하는 글자 목록")
                .arg(alphabet_arg()),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("render", sub_matches)) => handle_render(sub_matches),
        Some(("sweep", sub_matches)) => handle_sweep(sub_matches),
        Some(("letters", sub_matches)) => handle_letters(sub_matches),
        _ => {
            eprintln!("명령을 지정해주세요. --help를 참조하세요.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("오류: {:#}", e);
        process::exit(1);
    }
}

fn load_source(matches: &ArgMatches) -> Result<GlyphSource> {
    match matches.get_one::<String>("alphabet") {
        Some(path) => GlyphSource::from_json_file(path)
            .with_context(|| format!("글리프 테이블 로드 실패: {}", path)),
        None => Ok(GlyphSource::default()),
    }
}

fn handle_render(matches: &ArgMatches) -> Result<()> {
    let symbol = matches.get_one::<String>("symbol").context("symbol 누락")?;
    let cutoff: f64 = matches
        .get_one::<String>("cutoff")
        .context("cutoff 누락")?
        .parse()
        .context("cutoff 는 실수여야 합니다")?;
    let precision: usize = matches
        .get_one::<String>("precision")
        .context("precision 누락")?
        .parse()
        .context("precision 은 정수여야 합니다")?;

    let config = if matches.get_flag("clamp") {
        PipelineConfig::lenient()
    } else {
        PipelineConfig::strict()
    };
    let pipeline = CompressionPipeline::new(load_source(matches)?, config)?;
    let result = pipeline.render(symbol, cutoff)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&RenderSummary::from(&result))?);
        return Ok(());
    }

    println!("{}", report::summary(&result));
    println!("원본:");
    println!("{}", report::ascii_image(&result.original, RECONSTRUCTION_THRESHOLD));
    println!("복원:");
    println!("{}", report::ascii_image(&result.reconstructed, RECONSTRUCTION_THRESHOLD));
    println!("DCT 계수:");
    println!("{}", report::value_table(&result.transformed, precision));
    println!("컷오프 후 계수:");
    println!("{}", report::value_table(&result.quantized, precision));
    println!("복원 값:");
    println!("{}", report::value_table(&result.reconstructed, precision));
    Ok(())
}

fn handle_sweep(matches: &ArgMatches) -> Result<()> {
    let symbol = matches.get_one::<String>("symbol").context("symbol 누락")?;
    let steps: usize = matches
        .get_one::<String>("steps")
        .context("steps 누락")?
        .parse()
        .context("steps 는 정수여야 합니다")?;

    let pipeline = CompressionPipeline::new(load_source(matches)?, PipelineConfig::strict())?;
    let points = pipeline.sweep(symbol, &linear_cutoffs(steps))?;

    println!("컷오프 | 유지 계수 | 압축률 | RMSE");
    println!("-------|-----------|--------|---------");
    for point in points {
        let rate = match point.compression_rate {
            Some(rate) => format!("{:6.2}", rate),
            None => format!("{:>6}", "∞"),
        };
        println!(
            "{:6.3} | {:9} | {} | {:.6}",
            point.cutoff, point.retained, rate, point.rmse
        );
    }
    Ok(())
}

fn handle_letters(matches: &ArgMatches) -> Result<()> {
    let source = load_source(matches)?;
    let letters: String = source.symbols().into_iter().collect();
    println!("{}", letters);
    Ok(())
}
