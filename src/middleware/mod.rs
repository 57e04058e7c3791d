//! # 미들웨어 모듈
//!
//! 모든 라우트에 공통으로 적용되는 레이어입니다.
//! - `cors`: 프론트엔드(localhost:4200) 출처만 허용하는 CORS 정책

pub mod cors;

pub use cors::*;
