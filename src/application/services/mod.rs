//! Business logic services for the application layer.

pub mod auth_service;
pub mod bank_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use bank_service::BankService;
pub use user_service::{CreateUser, UpdateUser, UserService};
