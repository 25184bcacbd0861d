//! 택시 서비스 백엔드 폼 계층
//!
//! 택시 회사 관리 시스템의 입력 검증을 담당하는 라이브러리입니다.
//! 운전자 계정 생성, 운전자 면허 정보 수정, 차량 등록 폼을
//! 검증하고 정리된 값을 도메인 엔티티로 옮깁니다.
//!
//! # Features
//!
//! - **면허 번호 검증**: 8자리, 대문자 3자 + 숫자 5자
//! - **운전자 폼**: 계정 생성(비밀번호 확인 포함), 이름/이메일/면허 수정
//! - **차량 폼**: 운전자 다중 선택, 제조사 선택
//! - **에러 응답**: 필드별 에러를 actix-web JSON 응답으로 변환
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Services     │ ← 폼 처리 흐름, 비밀번호 해싱
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │      Forms      │ ← 필드 검증, 교차 필드 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Entities     │ ← Driver, Car, Manufacturer
//! └─────────────────┘
//! ```
//!
//! 저장, 라우팅, 화면 렌더링은 호스트 애플리케이션의 몫입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use taxi_service_backend::domain::forms::DriverCreateForm;
//! use taxi_service_backend::services::drivers::DriverService;
//!
//! let form: DriverCreateForm = serde_json::from_str(body)?;
//! let driver = DriverService::new().create_driver(form)?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
