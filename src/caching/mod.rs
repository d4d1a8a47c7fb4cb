//! # Caching Module
//!
//! 원격 Redis 캐시에 대한 관리형 연결 계층입니다.
//! 세션 데이터, 게임 상태, 레이트 리밋 카운터 등 만료 시간이 있는
//! 일시적 상태를 저장하는 데 사용됩니다.
//!
//! ## 모듈 구성
//!
//! - [`connection`] - 검증된 보안 연결을 수립하는 연결 팩토리
//! - [`redis`] - 타입이 지정된 get/set/delete 캐시 클라이언트
//!
//! ## 구성 흐름
//!
//! ```text
//! RedisConfig ──(검증/수립)──▶ ConnectionManager ──(래핑)──▶ RedisClient
//! ```
//!
//! 연결은 프로세스 시작 시 한 번 수립되고, 이후 모든 호출자가
//! 동일한 멀티플렉싱 연결을 공유합니다.

pub mod connection;
pub mod redis;
