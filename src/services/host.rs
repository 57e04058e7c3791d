//! # 호스트 식별자(Host identity) 조회
//!
//! 현재 프로세스가 실행 중인 머신(컨테이너 인스턴스)의 이름을 조회합니다.
//! Cloud Run에서는 인스턴스마다 다른 값이 나오므로,
//! 로드밸런서 뒤에서 어느 인스턴스가 응답했는지 확인하는 데 쓰입니다.
//!
//! 조회 방식을 트레이트로 분리해 두었기 때문에
//! 테스트에서는 고정값이나 항상 실패하는 구현을 `AppState`에 주입할 수 있습니다.

use crate::error::AppError;

/// 호스트 이름을 알려주는 대상
///
/// `Send + Sync`: 여러 요청(스레드)에서 `Arc<dyn HostIdentity>`로 동시에 공유하기 위한 조건입니다.
/// 조회는 읽기 전용이며 공유 상태를 바꾸지 않습니다.
pub trait HostIdentity: Send + Sync {
    /// 현재 호스트 이름을 반환합니다. 실패하면 `AppError`.
    fn hostname(&self) -> Result<String, AppError>;
}

/// 운영체제에 호스트 이름을 묻는 기본 구현 (`gethostname(2)`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostIdentity for SystemHost {
    fn hostname(&self) -> Result<String, AppError> {
        // hostname::get(): io::Result<OsString>
        // `?`로 io::Error → AppError::Hostname 자동 변환
        let name = hostname::get()?;
        // OsString은 UTF-8이 아닐 수 있습니다. JSON 문자열로 보낼 수 없으므로 에러로 처리합니다.
        name.into_string().map_err(|raw| {
            AppError::Internal(format!("hostname is not valid UTF-8: {:?}", raw))
        })
    }
}
