//! # Domain Entities Module
//!
//! 택시 차량 관리 도메인의 핵심 엔티티들을 정의합니다.
//! 저장과 조회는 호스트 애플리케이션의 영속 계층이 담당하며,
//! 이 크레이트는 폼 처리 결과로 엔티티를 생성하거나 수정하기만 합니다.
//!
//! ## 엔티티 관계
//!
//! ```text
//! Manufacturer 1 ──── * Car * ──── * Driver
//!                          (drivers: 0명 이상)
//! ```
//!
//! ## 엔티티 설계 원칙
//!
//! - **ID 참조**: 엔티티 간 직접 참조 대신 `Uuid` 참조 사용
//! - **민감 정보 보호**: 비밀번호 해시는 직렬화하지 않음
//! - **폼 초기값**: [`ModelInstance`](crate::domain::forms::ModelInstance) 구현으로
//!   수정 폼의 초기값 제공

pub mod cars;
pub mod drivers;

pub use cars::{Car, Manufacturer};
pub use drivers::Driver;
