//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 폼 처리 결과를 엔티티로 바꾸는 흐름을 도메인별로 제공합니다.
//! 저장은 하지 않으며, 만들어지거나 수정된 엔티티를 호출자에게 돌려줍니다.
//!
//! # Features
//!
//! - 운전자 계정 생성 (bcrypt 해싱 포함)
//! - 운전자 이름/이메일/면허 번호 수정
//! - 차량 생성/수정 및 운전자 배정
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{cars::CarService, drivers::DriverService};
//!
//! let driver = DriverService::new().create_driver(create_form)?;
//! let car = CarService::new().create_car(car_form, &context)?;
//! ```

pub mod cars;
pub mod drivers;
