//! Request/response DTOs for the REST API.

pub mod basket_dto;

pub use basket_dto::{CreateBasketRequest, DeleteBasketResponse, UpdateBasketRequest};
