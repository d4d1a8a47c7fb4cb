//! # Configuration Module
//!
//! 체스 게임 백엔드의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`cache_config`] - Redis 캐시 연결 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 명시적 바인딩 (Explicit Binding)
//!
//! 프레임워크가 암묵적으로 주입하는 대신, 시작 시 환경 변수에서 한 번
//! 설정 구조체를 채우고 검증한 뒤 값/참조로 전달합니다.
//! Spring의 `@Value("${...}")` 주입을 명시적 구조체로 대체한 형태입니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 비밀번호는 환경 변수로만 제공
//! - `Debug` 출력에서 비밀번호는 항상 마스킹
//! - 필수 설정값 누락 시 서버는 시작하지 않음
//!
//! ### 3. 조기 검증 (Fail Fast)
//!
//! 설정 오류는 첫 네트워크 시도 이전, 시작 시점에 발견됩니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수 환경 변수
//! export REDIS_HOST="your-instance.upstash.io"
//! export REDIS_PASSWORD="your-secret-password"
//!
//! # 선택적 환경 변수
//! export REDIS_PORT="6379"        # 기본값: 6379
//! export REDIS_SSL="true"         # 기본값: true
//! export REDIS_TIMEOUT_MS="2000"  # 기본값: 2000
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct RedisConfig` |
//! | `@Value("${spring.redis.host}")` | `env::var("REDIS_HOST")` |
//! | `application.yml` | `.env` 파일 |

pub mod cache_config;

pub use cache_config::*;
