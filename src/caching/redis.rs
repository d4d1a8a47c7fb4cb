//! # Redis 캐시 클라이언트 구현
//!
//! 이 모듈은 Redis를 백엔드로 하는 타입 캐시 클라이언트를 제공합니다.
//! Spring Framework의 `RedisTemplate<String, Object>`와 유사한 역할을
//! 수행하며, 타입 안전성과 비동기 처리를 지원합니다.
//!
//! ## 설계 철학
//!
//! - **타입 안전성**: 호출자가 `get`마다 기대 타입을 명시 (런타임 타입 추론 없음)
//! - **비동기 우선**: 모든 작업이 async/await 기반으로 구현
//! - **에러 처리**: 연결 실패와 캐시 미스, 디코딩 실패를 명확히 구분
//! - **자동 직렬화**: Serde를 통한 투명한 JSON 변환
//!
//! ## 직렬화 정책
//!
//! | 대상 | 인코딩 | 이유 |
//! |------|--------|------|
//! | 키 | 문자열 그대로 | 값 직렬화기를 거치지 않아 키 주입/타입 모호성 차단 |
//! | 값 | JSON (serde_json) | 임의 구조체 저장, 언어 경계 간 호환 |
//!
//! 언어/프로세스 경계를 넘는 왕복에서 원래 타입의 정확한 복원은
//! 보장되지 않습니다. 형태만 필요한 경우 `serde_json::Value`로
//! 읽는 것이 안전한 폴백입니다.

use std::time::Duration;

use log::error;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde::{Serialize, de::DeserializeOwned};

use crate::errors::{AppError, AppResult};

/// Redis 캐시 클라이언트 래퍼
///
/// 이 구조체는 Redis 서버와의 상호작용을 추상화하며,
/// Spring의 `RedisTemplate`과 유사한 기능을 제공합니다.
///
/// ## 특징
///
/// - **공유 연결**: 팩토리가 수립한 멀티플렉싱 연결 핸들을 래핑
/// - **자동 직렬화**: JSON 기반 객체 저장/조회
/// - **TTL 지원**: 쓰기 시 밀리초 정밀도 만료 시간 지정 가능
/// - **동시성 안전**: `Clone + Send + Sync`, 외부 잠금 없이 동시 호출 가능
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::time::Duration;
/// use serde::{Serialize, Deserialize};
/// use crate::caching::redis::RedisClient;
///
/// #[derive(Serialize, Deserialize)]
/// struct GameSession {
///     user_id: String,
///     game_id: String,
/// }
///
/// let session = GameSession {
///     user_id: "user123".to_string(),
///     game_id: "game456".to_string(),
/// };
///
/// // 세션 정보 10분 캐싱
/// redis.set("session:abc", &session, Some(Duration::from_secs(600))).await?;
///
/// // 캐시된 데이터 조회 (기대 타입 명시)
/// let cached: Option<GameSession> = redis.get("session:abc").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    /// 공유 멀티플렉싱 연결 핸들
    ///
    /// 팩토리가 시작 시 한 번 수립하며, 단일 TCP 연결에서
    /// 여러 동시 요청을 처리할 수 있습니다.
    conn: ConnectionManager,
}

impl RedisClient {
    /// 수립된 연결 핸들을 래핑하는 클라이언트를 생성합니다.
    ///
    /// 연결 수립은 [`RedisConnectionFactory`]의 책임입니다. 클라이언트는
    /// 생성자 주입으로 핸들을 전달받으며, 전역 조회를 사용하지 않습니다.
    ///
    /// [`RedisConnectionFactory`]: crate::caching::connection::RedisConnectionFactory
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// 지정된 키에서 값을 조회합니다.
    ///
    /// JSON으로 직렬화된 데이터를 기대 타입 `T`로 역직렬화하여 반환합니다.
    ///
    /// ## 반환값
    ///
    /// - `Ok(Some(T))` - 키가 존재하고 역직렬화 성공
    /// - `Ok(None)` - 키가 존재하지 않거나 TTL 만료로 제거됨
    /// - `Err(ConnectionError)` - 네트워크/타임아웃 오류
    /// - `Err(SerializationError)` - 저장된 바이트를 `T`로 디코딩 실패
    ///
    /// 캐시 미스(`Ok(None)`)와 데이터 손상(`SerializationError`)은
    /// 반드시 구분되어 반환됩니다.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await.map_err(|e| {
            error!("Redis GET 실패 (key={}): {}", key, e);
            AppError::from(e)
        })?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json).map_err(|e| {
                    error!("캐시 값 역직렬화 실패 (key={}): {}", key, e);
                    AppError::SerializationError(format!(
                        "Failed to decode cached value for key '{}': {}",
                        key, e
                    ))
                })?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// 지정된 키에 값을 저장합니다.
    ///
    /// 객체를 JSON으로 직렬화하여 Redis에 저장합니다. 기존 키가 있으면
    /// 단일 명령으로 덮어쓰므로, 동시 읽기는 이전 값 또는 새 값 전체 중
    /// 하나만 관찰합니다.
    ///
    /// ## TTL 동작
    ///
    /// `ttl`이 주어지면 밀리초 정밀도(`PSETEX` 의미론)로 만료를 설정합니다.
    /// 만료는 원격 서비스가 수행하며, 요청한 기간보다 일찍 제거되지
    /// 않습니다. `ttl`이 `None`이면 영구 저장됩니다.
    ///
    /// ## 사용 시나리오
    ///
    /// | 용도 | 권장 TTL |
    /// |------|----------|
    /// | WebSocket 세션 | 1-24시간 |
    /// | 게임 상태 | 10-60분 |
    /// | 레이트 리밋 카운터 | 1-60초 |
    pub async fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
    ) -> AppResult<()> {
        let json = serde_json::to_string(value).map_err(|e| {
            error!("캐시 값 직렬화 실패 (key={}): {}", key, e);
            AppError::SerializationError(format!(
                "Failed to encode value for key '{}': {}",
                key, e
            ))
        })?;

        let mut conn = self.conn.clone();
        let result: Result<(), redis::RedisError> = match ttl {
            Some(ttl) => conn.pset_ex(key, json, ttl.as_millis() as u64).await,
            None => conn.set(key, json).await,
        };

        result.map_err(|e| {
            error!("Redis SET 실패 (key={}): {}", key, e);
            AppError::from(e)
        })
    }

    /// 지정된 키를 삭제합니다.
    ///
    /// Spring의 `@CacheEvict`에 해당하는 연산입니다. 키가 존재하지
    /// 않아도 성공으로 처리되므로 멱등적입니다.
    pub async fn del(&self, key: &str) -> AppResult<()> {
        let mut conn = self.conn.clone();
        conn.del(key).await.map_err(|e| {
            error!("Redis DEL 실패 (key={}): {}", key, e);
            AppError::from(e)
        })
    }

    /// 여러 키를 한 번에 삭제합니다.
    ///
    /// 관련 캐시 항목을 일괄 무효화할 때 사용하며, 네트워크 왕복을
    /// N번에서 1번으로 줄입니다. 빈 배열은 즉시 성공 처리됩니다.
    pub async fn del_multiple(&self, keys: &[String]) -> AppResult<()> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn.clone();
        conn.del(keys).await.map_err(|e| {
            error!("Redis DEL 실패 (keys={:?}): {}", keys, e);
            AppError::from(e)
        })
    }

    /// 연결 도달 가능성을 확인합니다.
    ///
    /// 헬스체크 엔드포인트에서 사용하는 경량 프로브입니다.
    /// 저장된 데이터를 변경하지 않습니다.
    ///
    /// ## 반환값
    ///
    /// - `Ok(())` - 서버가 PING에 응답함
    /// - `Err(ConnectionError)` - 서버 도달 불가 또는 타임아웃
    pub async fn ping(&self) -> AppResult<()> {
        let mut conn = self.conn.clone();
        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| {
                error!("Redis PING 실패: {}", e);
                AppError::from(e)
            })
    }
}
