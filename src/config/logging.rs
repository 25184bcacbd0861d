//! 로깅 초기화
//!
//! 라이브러리 코드는 `log` 매크로만 사용하고,
//! 실제 출력은 호스트 애플리케이션이 `env_logger`로 초기화합니다.

use env_logger::Env;

/// 기본 로그 필터
pub const DEFAULT_LOG_FILTER: &str = "info,taxi_service_backend=debug";

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 [`DEFAULT_LOG_FILTER`]를 사용합니다.
/// 이미 초기화된 경우 아무 일도 하지 않습니다.
///
/// ```bash
/// RUST_LOG=taxi_service_backend::services=debug cargo run
/// ```
pub fn init_logging() {
    if env_logger::try_init_from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).is_err() {
        log::debug!("Logger already initialized");
    }
}

/// 테스트용 로거 초기화 (출력은 테스트 하네스가 캡처)
pub fn try_init_test_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}
