pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AuthError, AuthService, Registration, UserInfo};
pub use auth_service_impl::SeaOrmAuthService;

pub mod identity;
pub use identity::{AssertedIdentity, Caller, IdentityError, IdentityResolver};
