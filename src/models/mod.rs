//! # 데이터 모델 모듈
//!
//! 응답 본문으로 직렬화되는 구조체들을 정의합니다.
//! 모든 값은 요청마다 새로 만들어지고, 응답을 보낸 뒤 버려집니다.
//! - `envelope`: `GET /`의 성공 응답과 에러 응답 본문

pub mod envelope;

pub use envelope::*;
