pub use super::applications::Entity as Applications;
pub use super::jobs::Entity as Jobs;
pub use super::users::Entity as Users;
