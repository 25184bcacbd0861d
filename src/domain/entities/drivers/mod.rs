//! 운전자 엔티티 모듈

pub mod driver;

pub use driver::Driver;
