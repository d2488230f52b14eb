pub mod check_auth;
pub mod login;
pub mod register;

pub use check_auth::check_auth;
pub use login::login;
pub use register::register;
