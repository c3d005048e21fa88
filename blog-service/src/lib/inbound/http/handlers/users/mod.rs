pub mod get_user;
pub mod list_users;

pub use get_user::get_user;
pub use list_users::list_users;
