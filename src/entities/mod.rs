pub mod prelude;

pub mod applications;
pub mod jobs;
pub mod users;
