//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `PORT`: 서버 포트 번호 (Cloud Run이 컨테이너에 주입합니다. 기본값 8080)
//!
//! 바인딩 주소는 설정할 수 없으며 항상 모든 인터페이스(`0.0.0.0`)입니다.
//! 로드밸런서가 컨테이너 외부에서 접속해야 하기 때문입니다.

use std::env;

/// 기본 포트. Cloud Run이 `PORT`를 지정하지 않았을 때 사용합니다.
pub const DEFAULT_PORT: u16 = 8080;

/// 모든 네트워크 인터페이스
pub const BIND_HOST: &str = "0.0.0.0";

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 서버가 바인딩할 호스트 주소 (항상 "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 8080)
    /// u16: 0~65535 범위의 부호 없는 16비트 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 필수 환경변수가 없으므로 실패하지 않습니다.
    /// `PORT`가 숫자가 아니면 경고 로그를 남기고 기본값으로 시작합니다.
    pub fn from_env() -> Self {
        // env::var(): Result<String, VarError>
        // .ok(): 변수가 없거나 유니코드가 아니면 None
        Self::from_port_var(env::var("PORT").ok().as_deref())
    }

    /// `PORT` 값(원문 문자열)으로부터 설정을 만듭니다.
    ///
    /// 환경변수를 직접 건드리지 않고 테스트할 수 있도록 분리한 함수입니다.
    pub fn from_port_var(raw: Option<&str>) -> Self {
        let port = match raw {
            None => DEFAULT_PORT,
            // .trim(): " 9090\n"처럼 공백이 섞인 값도 허용
            // .parse::<u16>(): 숫자가 아니거나 65535를 넘으면 Err
            Some(value) => value.trim().parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid PORT value {:?}, falling back to {}",
                    value,
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }),
        };

        Self {
            host: BIND_HOST.to_string(),
            port,
        }
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_port_var(None)
    }
}
