//! 운전자 계정 서비스 모듈
//!
//! 운전자 생성과 면허 정보 수정 흐름을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::drivers::DriverService;
//!
//! let driver_service = DriverService::new();
//! let driver = driver_service.create_driver(form)?;
//! ```

pub mod driver_service;

pub use driver_service::DriverService;
