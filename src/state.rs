//! Shared application state.

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::api::dto::pagination::PageLimits;
use crate::application::services::{AuthService, BankService, UserService};
use crate::infrastructure::persistence::{PgBankRepository, PgTokenRepository, PgUserRepository};

pub type Users = UserService<PgUserRepository>;
pub type Banks = BankService<PgBankRepository>;
pub type Auth = AuthService<PgTokenRepository>;

/// State injected into every handler.
///
/// Cloning is cheap: every field is an `Arc` or `Copy`. The generic resource
/// handlers pick their service out with `State<Arc<Users>>` /
/// `State<Arc<Banks>>` through the [`FromRef`] impls below.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub user_service: Arc<Users>,
    pub bank_service: Arc<Banks>,
    pub auth_service: Arc<Auth>,
    pub page_limits: PageLimits,
}

impl AppState {
    /// Wires the PostgreSQL repositories into their services.
    pub fn new(pool: Arc<PgPool>, token_signing_secret: String, page_limits: PageLimits) -> Self {
        let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
        let bank_repo = Arc::new(PgBankRepository::new(pool.clone()));
        let token_repo = Arc::new(PgTokenRepository::new(pool.clone()));

        Self {
            db: pool,
            user_service: Arc::new(UserService::new(user_repo)),
            bank_service: Arc::new(BankService::new(bank_repo)),
            auth_service: Arc::new(AuthService::new(token_repo, token_signing_secret)),
            page_limits,
        }
    }
}

impl FromRef<AppState> for Arc<Users> {
    fn from_ref(state: &AppState) -> Self {
        state.user_service.clone()
    }
}

impl FromRef<AppState> for Arc<Banks> {
    fn from_ref(state: &AppState) -> Self {
        state.bank_service.clone()
    }
}

impl FromRef<AppState> for PageLimits {
    fn from_ref(state: &AppState) -> Self {
        state.page_limits
    }
}
