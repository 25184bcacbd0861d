//! # Domain Layer
//!
//! 택시 차량 관리 서비스의 도메인 계층입니다.
//!
//! ```text
//! domain/
//! ├── entities/     ← Driver, Car, Manufacturer
//! ├── forms/        ← 운전자 생성/수정 폼, 차량 폼, 공용 폼 파이프라인
//! └── validators/   ← 폼에 묶이지 않는 필드 검증 함수 (면허 번호)
//! ```
//!
//! ## 처리 흐름
//!
//! ```text
//! 제출 데이터 (JSON / form-urlencoded)
//!      │ serde
//!      ▼
//! Form 구조체 ──validate()──▶ 필드 에러
//!      │ clean_form()
//!      ▼
//! 면허 번호 / 비밀번호 확인 / 선택 후보 검사
//!      │
//!      ▼
//! Cleaned 값 ──서비스──▶ Driver / Car
//! ```

pub mod entities;
pub mod forms;
pub mod validators;

pub use entities::*;
pub use forms::*;
