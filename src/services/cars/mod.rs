//! 차량 서비스 모듈

pub mod car_service;

pub use car_service::CarService;
