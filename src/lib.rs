//! # Cloud Run 배포 확인 서버
//!
//! 컨테이너가 배포되어 로드밸런서 뒤에서 응답하는지 확인하기 위한 최소한의 HTTP 서버입니다.
//! `GET /` 하나만 제공하며, 환영 메시지와 호스트 이름, 버전(`v2`)을 JSON으로 돌려줍니다.
//!
//! 구성:
//! - `config`: 환경변수(`PORT`) 기반 설정
//! - `error`: 에러 타입과 HTTP 500 응답 변환
//! - `middleware`: CORS 정책
//! - `models`: 응답 본문 구조체
//! - `routes`: 핸들러와 공유 상태(`AppState`)
//! - `services`: 호스트 이름 조회
//!
//! 바이너리(`main.rs`)는 로깅과 설정을 초기화한 뒤 [`serve`]를 호출할 뿐입니다.
//! 라우터 구성은 여기에 두어 통합 테스트(`tests/`)에서도 그대로 사용합니다.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::AppError;
pub use routes::AppState;

/// 라우터를 구성합니다.
///
/// - `GET /` → [`routes::home`]
/// - 그 밖의 경로는 Axum 기본 404 (빈 본문)
/// - 모든 경로에 CORS 레이어와 HTTP 요청 로깅(TraceLayer)을 적용합니다.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .with_state(state)
        .layer(middleware::cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// 이미 바인딩된 리스너에서 서버를 실행합니다.
///
/// 종료 훅이 없으므로 프로세스가 외부 신호로 종료될 때까지 반환하지 않습니다.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, app(state)).await
}
