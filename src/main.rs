//! hangeul-audit - 한국어 어체/절:구 비율 감사 CLI

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hangeul_audit::config::load_config;
use hangeul_audit::{AuditError, AuditReport, Auditor};

/// 태그가 제거된 평문 파일의 어체 일관성과 절:구 비율을 검사합니다.
///
/// 구 수를 생략하면 절 수만 계산해 보고합니다.
#[derive(Parser, Debug)]
#[command(name = "hangeul-audit", version, about)]
struct Cli {
    /// 검사할 평문 파일 (UTF-8)
    file: PathBuf,

    /// 직접 센 구(Phrase) 수
    #[arg(allow_negative_numbers = true)]
    phrase_count: Option<i64>,

    /// 설정 파일 경로 (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON으로 출력
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> Result<AuditReport, AuditError> {
    let config = load_config(cli.config.as_deref());
    let text = fs::read_to_string(&cli.file).map_err(|source| AuditError::Io {
        path: cli.file.clone(),
        source,
    })?;
    Auditor::new(config).audit(&text, cli.phrase_count)
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            log::error!("감사 실패: {}", e);
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("JSON 직렬화 실패: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("파일: {}", cli.file.display());
        print!("{}", report);
    }

    if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
