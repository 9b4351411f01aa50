use std::sync::Arc;

use crate::auth::application::use_cases::{
    login_admin::LoginAdminUseCase, logout_admin::LogoutAdminUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutAdminUseCase + Send + Sync>,
}
