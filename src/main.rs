//! # 배포 확인 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정(PORT) 읽기
//! 4. TCP 리스너 바인딩
//! 5. HTTP 서버 시작 (프로세스가 종료될 때까지)

use anyhow::Result;
use cloudrun_app::{serve, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다. (Cloud Run에서는 PORT가 직접 주입됨)
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cloudrun_app=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    // PORT가 없거나 숫자가 아니면 8080을 사용합니다.
    let config = Config::from_env();
    tracing::info!("Starting Cloud Run app on {}:{}", config.host, config.port);

    // ── 4단계: 리스너 바인딩 ──
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // ── 5단계: 서버 시작 ──
    // 종료 처리는 하지 않습니다. 컨테이너 플랫폼이 신호로 프로세스를 끝냅니다.
    serve(listener, AppState::default()).await?;

    Ok(())
}
