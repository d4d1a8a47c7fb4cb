//! 체스 게임 백엔드 캐시 계층
//!
//! 원격 Redis 인스턴스에 대한 보안 연결과 타입 캐시 인터페이스를
//! 제공하는 백엔드 서비스입니다. WebSocket 세션, 게임 상태,
//! 레이트 리밋 카운터 같은 일시적 상태를 TTL과 함께 저장합니다.
//!
//! # Features
//!
//! - **보안 연결**: TLS 기본 적용, 비밀번호 인증, 명령 타임아웃
//! - **조기 검증**: 설정 오류는 네트워크 시도 이전 시작 시점에 실패
//! - **타입 캐시**: Serde 기반 JSON 직렬화로 임의 구조체 저장/조회
//! - **TTL 지원**: 키별 만료 시간으로 일시적 상태 관리
//! - **헬스체크**: 캐시 도달 가능성을 보고하는 `/health` 엔드포인트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health 등 REST 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   RedisClient   │ ← 타입 get/set/delete + TTL
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ConnectionManager│ ← 공유 멀티플렉싱 연결 (팩토리가 수립)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Remote Redis   │ ← 세션/게임 상태 저장소 (TLS)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use chess_game_backend::config::RedisConfig;
//! use chess_game_backend::caching::connection::RedisConnectionFactory;
//! use chess_game_backend::caching::redis::RedisClient;
//!
//! let config = RedisConfig::from_env();
//! let conn = RedisConnectionFactory::build(&config).await?;
//! let redis = RedisClient::new(conn);
//!
//! redis.set("game:42:state", &state, Some(Duration::from_secs(600))).await?;
//! let state: Option<GameState> = redis.get("game:42:state").await?;
//! ```

pub mod caching;
pub mod config;
pub mod errors;
pub mod routes;
