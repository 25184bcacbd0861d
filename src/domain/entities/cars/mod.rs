//! 차량 관련 엔티티 모듈

pub mod car;
pub mod manufacturer;

pub use car::Car;
pub use manufacturer::Manufacturer;
