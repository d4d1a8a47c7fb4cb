//! Redis 연결 팩토리 구현
//!
//! 이 모듈은 검증된 설정으로부터 보안 Redis 연결 핸들을 수립합니다.
//! Spring의 `LettuceConnectionFactory`와 유사한 역할을 수행하며,
//! 프로세스당 한 번 호출되어 공유 가능한 연결 핸들을 생성합니다.
//!
//! ## 설계 철학
//!
//! - **조기 실패**: 설정 오류는 네트워크 시도 이전에 발견
//! - **보안 전송**: TLS가 기본값이며, 인증 파라미터는 생성 시점에 고정
//! - **단일 핸들**: 멀티플렉싱 연결 하나를 프로세스 전체가 공유
//!
//! ## 연결 관리
//!
//! 반환되는 [`ConnectionManager`]는 단일 TCP 연결 위에서 여러 동시
//! 요청을 멀티플렉싱하며, 연결이 끊어지면 자동으로 재연결을 시도합니다.

use log::info;
use redis::Client;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};

use crate::config::RedisConfig;
use crate::errors::{AppError, AppResult};

/// Redis 연결 팩토리
///
/// 설정 검증과 보안 전송 협상을 담당하는 팩토리입니다.
/// Spring의 `@Bean LettuceConnectionFactory`에 해당하며,
/// 애플리케이션 시작 시 한 번만 사용됩니다.
pub struct RedisConnectionFactory;

impl RedisConnectionFactory {
    /// 설정으로부터 공유 가능한 Redis 연결 핸들을 수립합니다.
    ///
    /// ## 동작 순서
    ///
    /// 1. 설정 검증 - `host`/`password` 누락 시 네트워크 시도 없이
    ///    [`AppError::ConfigurationError`] 반환
    /// 2. 연결 URL 생성 - `use_ssl`이 켜져 있으면 `rediss://` 스킴으로
    ///    TLS 채널 협상
    /// 3. 연결 수립 - `command_timeout`을 연결/응답 타임아웃으로 적용
    /// 4. `PING` 검증 - 핸들 반환 전에 서버 도달 가능성과 인증을 확인
    ///
    /// 4단계 덕분에 잘못된 TLS/인증 설정으로 "첫 사용 시 실패하는"
    /// 핸들이 반환되는 일은 없습니다. 수립 단계의 모든 실패는
    /// [`AppError::ConnectionError`]로 반환됩니다.
    ///
    /// ## 반환값
    ///
    /// - `Ok(ConnectionManager)` - 동시 사용 가능한 멀티플렉싱 연결 핸들
    /// - `Err(AppError)` - 설정 오류 또는 연결/인증/TLS 실패
    ///
    /// ## 사용 예제
    ///
    /// ```rust,ignore
    /// use crate::config::RedisConfig;
    /// use crate::caching::connection::RedisConnectionFactory;
    ///
    /// let config = RedisConfig::from_env();
    /// let conn = RedisConnectionFactory::build(&config).await?;
    /// ```
    pub async fn build(config: &RedisConfig) -> AppResult<ConnectionManager> {
        // 네트워크 시도 이전의 설정 검증
        config.validate()?;

        let client = Client::open(config.connection_url()).map_err(|e| {
            AppError::ConnectionError(format!(
                "Invalid Redis connection parameters for {}: {}",
                config.endpoint(),
                e
            ))
        })?;

        // 명령 타임아웃은 생성 시점에 고정되며 이후 재조정되지 않음
        let manager_config = ConnectionManagerConfig::new()
            .set_connection_timeout(config.command_timeout)
            .set_response_timeout(config.command_timeout);

        let mut conn = client
            .get_connection_manager_with_config(manager_config)
            .await
            .map_err(|e| {
                AppError::ConnectionError(format!(
                    "Failed to connect to Redis at {}: {}",
                    config.endpoint(),
                    e
                ))
            })?;

        // 연결 테스트 - PING 명령으로 서버 가용성과 인증 확인
        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| {
                AppError::ConnectionError(format!(
                    "Redis ping failed for {}: {}",
                    config.endpoint(),
                    e
                ))
            })?;

        info!(
            "✅ Redis 연결 성공: {} (ssl={}, timeout={}ms)",
            config.endpoint(),
            config.use_ssl,
            config.command_timeout.as_millis()
        );

        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config_with(host: &str, password: &str) -> RedisConfig {
        RedisConfig {
            host: host.to_string(),
            port: 6379,
            password: password.to_string(),
            use_ssl: true,
            command_timeout: Duration::from_millis(2000),
        }
    }

    #[tokio::test]
    async fn test_build_fails_fast_on_missing_host() {
        let result = RedisConnectionFactory::build(&config_with("", "secret")).await;

        match result {
            Err(AppError::ConfigurationError(msg)) => assert!(msg.contains("REDIS_HOST")),
            other => panic!("Expected ConfigurationError, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_build_fails_fast_on_missing_password() {
        let result = RedisConnectionFactory::build(&config_with("cache.example.com", "")).await;

        match result {
            Err(AppError::ConfigurationError(msg)) => assert!(msg.contains("REDIS_PASSWORD")),
            other => panic!("Expected ConfigurationError, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_build_reports_unreachable_host_as_connection_error() {
        // TEST-NET-1 주소는 라우팅되지 않으므로 타임아웃으로 실패한다
        let config = RedisConfig {
            host: "192.0.2.1".to_string(),
            port: 6379,
            password: "secret".to_string(),
            use_ssl: false,
            command_timeout: Duration::from_millis(200),
        };

        match RedisConnectionFactory::build(&config).await {
            Err(AppError::ConnectionError(_)) => {}
            other => panic!("Expected ConnectionError, got {:?}", other.err()),
        }
    }
}
