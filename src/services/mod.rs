//! # 서비스 계층
//!
//! 라우트 핸들러가 사용하는, HTTP와 무관한 기능을 모아둔 모듈입니다.
//! - `host`: 운영체제 호스트 이름 조회

pub mod host;

pub use host::*;
