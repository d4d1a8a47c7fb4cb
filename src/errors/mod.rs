//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 캐시 계층을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | 에러 타입 | 발생 시점 | 복구 전략 |
//! |-----------|-----------|-----------|
//! | `ConfigurationError` | 시작 시 설정 검증 | 복구 불가, 프로세스 종료 |
//! | `ConnectionError` | 연결 수립 또는 명령 수행 중 | 호출자가 재시도/차단 결정 |
//! | `SerializationError` | 저장된 값 디코딩 실패 | 데이터 손상 조사 필요 |
//!
//! `ConnectionError`와 "키 없음"(`Ok(None)`)은 반드시 구분됩니다.
//! 연결 실패를 캐시 미스로 위장하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! fn validate_host(host: &str) -> AppResult<()> {
//!     if host.trim().is_empty() {
//!         return Err(AppError::ConfigurationError(
//!             "Redis host is not configured. Set REDIS_HOST environment variable.".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 캐시 계층에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// HTTP 핸들러에서 반환되면 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 시작 시 설정값 누락/오류 (500 Internal Server Error)
    ///
    /// 네트워크 연결 시도 이전에 발생하며, 프로세스는 이 에러와 함께
    /// 서빙 상태에 진입하지 않고 종료되어야 합니다.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 네트워크/인증/TLS 협상/타임아웃 에러 (503 Service Unavailable)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// 저장된 값을 요청한 타입으로 디코딩 실패 (500 Internal Server Error)
    ///
    /// "키 없음"과는 구분되는 에러입니다. 호출자는 데이터 손상과
    /// 단순 부재를 구별할 수 있습니다.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ConnectionError(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<redis::RedisError> for AppError {
    /// Redis 드라이버 에러를 `ConnectionError`로 변환합니다.
    ///
    /// 원인(카테고리 포함)을 메시지에 보존하여 호출자가 진단할 수 있게 합니다.
    fn from(err: redis::RedisError) -> Self {
        AppError::ConnectionError(format!("{} ({:?})", err, err.kind()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_configuration_error_response() {
        let error = AppError::ConfigurationError("Redis host is not configured".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_connection_error_response() {
        let error = AppError::ConnectionError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_serialization_error_response() {
        let error = AppError::SerializationError("invalid JSON".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_message_names_kind() {
        let error = AppError::ConfigurationError("REDIS_HOST".to_string());
        assert!(error.to_string().starts_with("Configuration error:"));

        let error = AppError::SerializationError("bad bytes".to_string());
        assert!(error.to_string().starts_with("Serialization error:"));
    }
}
