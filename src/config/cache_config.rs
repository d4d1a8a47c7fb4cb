//! Redis 캐시 연결 설정 관리 모듈
//!
//! 호스트, 포트, 비밀번호, TLS 사용 여부, 명령 타임아웃 등
//! 원격 Redis 인스턴스 연결에 필요한 설정을 관리합니다.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::errors::{AppError, AppResult};

/// Redis 연결 기본 포트
const DEFAULT_REDIS_PORT: u16 = 6379;

/// 명령 타임아웃 기본값 (밀리초)
const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Redis 캐시 연결 설정
///
/// Spring의 `spring.redis.*` 프로퍼티 바인딩에 해당하는 구조체입니다.
/// 시작 시 [`RedisConfig::from_env`]로 한 번 채워지고, 이후
/// [`RedisConfig::validate`]를 통과한 값만 연결 수립에 사용됩니다.
///
/// ## 보안
///
/// - `password`는 비밀값입니다. `Debug` 출력에서 항상 마스킹됩니다.
/// - 원격 Redis(Upstash 등)는 TLS를 요구하므로 `use_ssl` 기본값은 `true`입니다.
#[derive(Clone)]
pub struct RedisConfig {
    /// Redis 서버 호스트 (필수)
    pub host: String,
    /// Redis 서버 포트 (기본값: 6379)
    pub port: u16,
    /// 인증 비밀번호 (필수, 비밀값)
    pub password: String,
    /// TLS 암호화 전송 사용 여부 (기본값: true)
    pub use_ssl: bool,
    /// 단일 명령의 최대 대기 시간 (기본값: 2000ms)
    pub command_timeout: Duration,
}

impl RedisConfig {
    /// 환경 변수에서 Redis 설정을 읽어옵니다.
    ///
    /// 값을 읽기만 하고 검증하지는 않습니다. 검증은 연결 수립 직전
    /// [`RedisConfig::validate`]에서 수행됩니다.
    ///
    /// ## 환경 변수
    ///
    /// - `REDIS_HOST`: 서버 호스트 (필수)
    /// - `REDIS_PORT`: 서버 포트 (기본값: 6379)
    /// - `REDIS_PASSWORD`: 인증 비밀번호 (필수)
    /// - `REDIS_SSL`: TLS 사용 여부 (기본값: true)
    /// - `REDIS_TIMEOUT_MS`: 명령 타임아웃 밀리초 (기본값: 2000)
    pub fn from_env() -> Self {
        let host = env::var("REDIS_HOST").unwrap_or_default();
        let password = env::var("REDIS_PASSWORD").unwrap_or_default();

        let port = env::var("REDIS_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_REDIS_PORT);

        let use_ssl = env::var("REDIS_SSL")
            .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        let timeout_ms = env::var("REDIS_TIMEOUT_MS")
            .ok()
            .and_then(|t| t.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            host,
            port,
            password,
            use_ssl,
            command_timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// 필수 설정값이 모두 채워졌는지 검증합니다.
    ///
    /// 네트워크 I/O 없이 수행되며, 누락된 필드를 명시한
    /// [`AppError::ConfigurationError`]를 반환합니다.
    ///
    /// ## 검증 규칙
    ///
    /// - `host`: 공백 제거 후 비어있으면 안 됨
    /// - `password`: 공백 제거 후 비어있으면 안 됨
    pub fn validate(&self) -> AppResult<()> {
        if self.host.trim().is_empty() {
            return Err(AppError::ConfigurationError(
                "Redis host is not configured. Set REDIS_HOST environment variable.".to_string(),
            ));
        }
        if self.password.trim().is_empty() {
            return Err(AppError::ConfigurationError(
                "Redis password is not configured. Set REDIS_PASSWORD environment variable."
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// 설정값으로부터 Redis 연결 URL을 생성합니다.
    ///
    /// `use_ssl`이 켜져 있으면 `rediss://` 스킴을 사용하여 모든 트래픽이
    /// TLS 채널 위에서 협상되도록 합니다. 비밀번호는 URL 예약 문자와
    /// 충돌하지 않도록 퍼센트 인코딩됩니다.
    ///
    /// ## 반환 형식
    ///
    /// ```text
    /// redis://:password@host:port    (평문)
    /// rediss://:password@host:port   (TLS)
    /// ```
    pub fn connection_url(&self) -> String {
        let scheme = if self.use_ssl { "rediss" } else { "redis" };
        format!(
            "{}://:{}@{}:{}",
            scheme,
            urlencoding::encode(&self.password),
            self.host,
            self.port
        )
    }

    /// 로그 출력용 엔드포인트 표현을 반환합니다. 비밀번호는 포함되지 않습니다.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for RedisConfig {
    /// 비밀번호를 마스킹한 디버그 출력을 생성합니다.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password", &"********")
            .field("use_ssl", &self.use_ssl)
            .field("command_timeout", &self.command_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> RedisConfig {
        RedisConfig {
            host: "cache.example.com".to_string(),
            port: 6380,
            password: "s3cret".to_string(),
            use_ssl: true,
            command_timeout: Duration::from_millis(2000),
        }
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let config = RedisConfig {
            host: "   ".to_string(),
            ..valid_config()
        };

        match config.validate() {
            Err(AppError::ConfigurationError(msg)) => assert!(msg.contains("REDIS_HOST")),
            other => panic!("Expected ConfigurationError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_password() {
        let config = RedisConfig {
            password: "".to_string(),
            ..valid_config()
        };

        match config.validate() {
            Err(AppError::ConfigurationError(msg)) => assert!(msg.contains("REDIS_PASSWORD")),
            other => panic!("Expected ConfigurationError, got {:?}", other),
        }
    }

    #[test]
    fn test_connection_url_uses_tls_scheme() {
        let config = valid_config();
        assert_eq!(
            config.connection_url(),
            "rediss://:s3cret@cache.example.com:6380"
        );
    }

    #[test]
    fn test_connection_url_plain_scheme_without_ssl() {
        let config = RedisConfig {
            use_ssl: false,
            ..valid_config()
        };
        assert!(config.connection_url().starts_with("redis://"));
    }

    #[test]
    fn test_connection_url_percent_encodes_password() {
        let config = RedisConfig {
            password: "p@ss/word".to_string(),
            ..valid_config()
        };

        let url = config.connection_url();
        assert!(url.contains("p%40ss%2Fword"));
        assert!(!url.contains("p@ss/word"));
    }

    #[test]
    fn test_debug_output_masks_password() {
        let debug = format!("{:?}", valid_config());
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("********"));
    }
}
