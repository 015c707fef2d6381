pub mod applications {

    /// Status every new application starts in. Nothing moves it afterwards.
    pub const DEFAULT_STATUS: &str = "pending";
}

pub mod limits {

    pub const MAX_USERNAME_LEN: usize = 80;

    pub const MAX_EMAIL_LEN: usize = 120;

    pub const MIN_EMAIL_LEN: usize = 3;

    pub const MAX_PASSWORD_LEN: usize = 128;

    pub const MAX_JOB_FIELD_LEN: usize = 100;

    pub const MAX_SALARY_LEN: usize = 50;
}
