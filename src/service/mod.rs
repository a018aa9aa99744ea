//! Service layer: basket lifecycle rules between handlers and store.

pub mod basket_service;

pub use basket_service::BasketService;
