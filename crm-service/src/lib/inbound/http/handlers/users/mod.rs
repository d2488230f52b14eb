pub mod list_users;

pub use list_users::list_users;
