//! Application services.

mod demo_service;

pub use demo_service::DemoService;
