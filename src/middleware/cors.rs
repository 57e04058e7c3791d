//! # CORS(Cross-Origin Resource Sharing) 정책
//!
//! 브라우저에서 실행되는 Angular 개발 서버(`localhost:4200`)가
//! 이 서버의 응답을 읽을 수 있도록 허용합니다.
//!
//! 허용 출처는 정확히 두 개이며, 모든 경로(`/*`)에 동일하게 적용됩니다.
//! 목록에 없는 출처의 요청에는 `Access-Control-Allow-Origin` 헤더를 붙이지 않습니다.
//! (`*`나 요청한 출처를 그대로 돌려주지 않음)

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// 응답을 읽을 수 있는 브라우저 출처 목록
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:4200", "https://localhost:4200"];

/// 프리플라이트(OPTIONS) 요청에 허용하는 HTTP 메서드
pub const ALLOWED_METHODS: [Method; 7] = [
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::OPTIONS,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

/// 라우터 전체에 `.layer()`로 적용할 CORS 레이어를 만듭니다.
///
/// 자격 증명(쿠키 등)은 허용하지 않으며, 요청 헤더는 무엇이든 허용합니다.
/// `CorsLayer`는 기본으로 `Vary: origin` 헤더를 붙여 캐시가 출처별로 응답을 구분하게 합니다.
pub fn cors_layer() -> CorsLayer {
    // 배열의 into_iter()는 값(&'static str)을 꺼내므로 from_static에 바로 넘길 수 있습니다.
    let origins = ALLOWED_ORIGINS.into_iter().map(HeaderValue::from_static);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(Any)
}
