//! 체스 게임 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 Redis 캐시 연결을 초기화합니다.
//! 설정 오류나 연결 실패 시 서버는 서빙 상태에 진입하지 않고 종료됩니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use chess_game_backend::caching::connection::RedisConnectionFactory;
use chess_game_backend::caching::redis::RedisClient;
use chess_game_backend::config::RedisConfig;
use chess_game_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 체스 게임 백엔드 시작중...");

    // 캐시 연결 초기화 - 실패 시 서빙 상태에 진입하지 않음
    let redis_client = initialize_cache().await;

    info!("✅ 캐시 계층이 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(redis_client).await
}

/// Redis 캐시 연결을 초기화합니다
///
/// 환경 변수에서 설정을 읽어 검증하고, 보안 연결을 수립한 뒤
/// 타입 캐시 클라이언트를 반환합니다.
///
/// 설정 누락([`ConfigurationError`])과 연결 실패([`ConnectionError`])
/// 모두 시작을 중단시킵니다. 유효한 캐시 연결 없이 서버가 요청을
/// 받는 일은 없습니다.
///
/// [`ConfigurationError`]: chess_game_backend::errors::AppError::ConfigurationError
/// [`ConnectionError`]: chess_game_backend::errors::AppError::ConnectionError
async fn initialize_cache() -> RedisClient {
    let config = RedisConfig::from_env();

    info!("📡 Redis 연결 중... (설정: {:?})", config);

    match RedisConnectionFactory::build(&config).await {
        Ok(conn) => RedisClient::new(conn),
        Err(e) => {
            error!("❌ 캐시 초기화 실패: {}", e);
            std::process::exit(1);
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함하며, 캐시 클라이언트를
/// `web::Data`로 주입하여 모든 핸들러가 동일한 연결을 공유하게 합니다.
///
/// # Returns
///
/// * `Ok(())` - 서버가 정상적으로 종료됨
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(redis_client: RedisClient) -> std::io::Result<()> {
    let bind_address = "127.0.0.1:8080";

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let redis_data = web::Data::new(redis_client);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // 캐시 클라이언트 주입 (생성자 주입, 전역 조회 없음)
            .app_data(redis_data.clone())

            // 미들웨어
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 개발환경과 운영환경을 구분하여 설정을 관리합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => println!(".env.prod 파일 로드 됨"),
            Err(e) => println!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => println!(".env.dev 파일 로드 됨"),
            Err(e) => println!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            println!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS 설정을 구성합니다.
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
