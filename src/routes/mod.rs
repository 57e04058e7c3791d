//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수와, 핸들러가 공유하는 상태를 정의합니다.
//!
//! 각 하위 모듈:
//! - `home`: `GET /` 환영 메시지 핸들러

pub mod home;

pub use home::*;

use std::sync::Arc;

use crate::services::{HostIdentity, SystemHost};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 요청 사이에 공유되는 것은 호스트 이름 조회 방식뿐이며, 변경 가능한 상태는 없습니다.
#[derive(Clone)]
pub struct AppState {
    /// 호스트 이름 조회 구현 (Arc: clone해도 같은 객체를 가리킵니다)
    pub host: Arc<dyn HostIdentity>,
}

impl AppState {
    /// 임의의 `HostIdentity` 구현으로 상태를 만듭니다. 테스트에서 주입용으로 씁니다.
    pub fn new(host: impl HostIdentity + 'static) -> Self {
        Self {
            host: Arc::new(host),
        }
    }
}

impl Default for AppState {
    /// 운영체제 호스트 이름을 사용하는 기본 상태
    fn default() -> Self {
        Self::new(SystemHost)
    }
}
