use serde::Serialize;

/// 환영 메시지 (고정 문자열)
pub const WELCOME_MESSAGE: &str = "Welcome to Cloud Run Deployment App!!!";

/// 응답에 실리는 애플리케이션 버전
pub const APP_VERSION: &str = "v2";

/// 에러 응답의 `status` 필드 값
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Welcome {
    pub message: &'static str,
    pub host: String,
    pub version: &'static str,
}

impl Welcome {
    pub fn new(host: String) -> Self {
        Self {
            message: WELCOME_MESSAGE,
            host,
            version: APP_VERSION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub status: &'static str,
}

impl ErrorEnvelope {
    pub fn internal(error: String) -> Self {
        Self {
            error,
            status: INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn welcome_serializes_exactly_three_fields() {
        let value = serde_json::to_value(Welcome::new("instance-1".into())).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "Welcome to Cloud Run Deployment App!!!",
                "host": "instance-1",
                "version": "v2"
            })
        );
    }

    #[test]
    fn error_envelope_carries_fixed_status() {
        let value = serde_json::to_value(ErrorEnvelope::internal("boom".into())).unwrap();
        assert_eq!(
            value,
            json!({ "error": "boom", "status": "Internal Server Error" })
        );
    }
}
