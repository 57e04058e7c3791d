//! # 루트(`/`) 핸들러
//!
//! 배포 확인용 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /` → `{ "message": "...", "host": "<hostname>", "version": "v2" }`
//!
//! 호스트 이름 조회에 실패하면 `AppError`가 HTTP 500
//! `{ "error": "...", "status": "Internal Server Error" }`로 변환됩니다.

use axum::{debug_handler, extract::State, Json};

use super::AppState;
use crate::{error::AppError, models::Welcome};

/// `GET /` — 환영 메시지, 호스트 이름, 버전을 반환합니다.
///
/// # 반환값
/// - `Ok(Json<Welcome>)`: HTTP 200, `Content-Type: application/json`
/// - `Err(AppError)`: HTTP 500 에러 응답
///
/// `#[debug_handler]`: 핸들러 시그니처가 Axum 요구사항에 맞지 않으면
/// 이해하기 쉬운 컴파일 에러를 보여줍니다.
#[debug_handler]
pub async fn home(State(state): State<AppState>) -> Result<Json<Welcome>, AppError> {
    // 호스트 이름은 요청마다 새로 조회합니다.
    let host = state.host.hostname()?;
    tracing::debug!("Serving welcome for host {}", host);
    Ok(Json(Welcome::new(host)))
}
