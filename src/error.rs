//! # 에러 처리 모듈
//!
//! 이 서버에서 발생할 수 있는 에러는 사실상 하나뿐입니다:
//! 호스트 이름 조회 실패. 종류와 상관없이 모두 HTTP 500으로 응답합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 `{"error": ..., "status": "Internal Server Error"}`로 변환

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorEnvelope;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
///
/// Display 메시지(`#[error("{0}")]`)는 원인 에러의 설명을 그대로 사용합니다.
/// 이 문자열이 응답의 `error` 필드에 들어갑니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 운영체제 호스트 이름 조회 실패 (gethostname)
    /// #[from]: std::io::Error → AppError::Hostname 자동 변환 (`?` 사용 가능)
    #[error("{0}")]
    Hostname(#[from] std::io::Error),

    /// 그 밖의 내부 오류 (예: UTF-8이 아닌 호스트 이름)
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 500 응답으로 변환합니다.
    ///
    /// 하위 종류를 구분하지 않고, 에러 설명 문자열을 그대로 본문에 담습니다.
    fn into_response(self) -> Response {
        let message = self.to_string();
        // 서버 관리자용 로그. 클라이언트 응답과 같은 메시지를 남깁니다.
        tracing::error!("Internal error: {}", message);

        let body = Json(ErrorEnvelope::internal(message));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn display_is_the_underlying_description() {
        let err = AppError::from(io::Error::other("no hostname"));
        assert_eq!(err.to_string(), "no hostname");

        let err = AppError::Internal("hostname is not valid UTF-8".into());
        assert_eq!(err.to_string(), "hostname is not valid UTF-8");
    }

    #[tokio::test]
    async fn every_variant_is_a_500_envelope() {
        let errors = [
            AppError::from(io::Error::new(io::ErrorKind::NotFound, "lookup failed")),
            AppError::Internal("boom".into()),
        ];

        for err in errors {
            let expected = err.to_string();
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["error"], expected);
            assert_eq!(body["status"], "Internal Server Error");
        }
    }
}
