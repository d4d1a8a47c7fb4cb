//! API 라우트 설정 모듈
//!
//! 캐시 계층 위에 노출되는 HTTP 엔드포인트를 등록합니다.
//! 현재는 헬스체크 엔드포인트만 포함하며, 게임/세션 API는 이 계층을
//! 호출하는 협력 컴포넌트로서 별도 모듈에 추가됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use chess_game_backend::routes::configure_all_routes;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::caching::redis::RedisClient;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
/// Redis 연결 도달 가능성을 `PING`으로 확인하며, 저장된 데이터는
/// 변경하지 않습니다.
///
/// # Returns
///
/// * `200 OK` - 캐시 연결이 정상일 때
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///   - `cache`: 캐시 도달 가능 여부 ("reachable")
/// * `503 Service Unavailable` - 캐시 연결 실패 시
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "chess_game_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "cache": "reachable"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(
    redis: web::Data<RedisClient>,
) -> Result<actix_web::HttpResponse, crate::errors::AppError> {
    redis.ping().await?;

    Ok(actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "chess_game_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "cache": "reachable"
    })))
}
