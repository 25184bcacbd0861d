//! # Configuration Module
//!
//! 택시 서비스 폼 계층의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 비밀번호 해싱 비용
//! - [`logging`] - `env_logger` 초기화
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export RUST_LOG="info,taxi_service_backend=debug"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{init_logging, Environment, PasswordConfig};
//!
//! init_logging();
//! let env = Environment::current();
//! let cost = PasswordConfig::bcrypt_cost();
//! ```

pub mod data_config;
pub mod logging;

pub use data_config::*;
pub use logging::*;
