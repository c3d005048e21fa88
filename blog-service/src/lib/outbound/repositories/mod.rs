pub mod category;
pub mod post;
pub mod user;

pub use category::PostgresCategoryRepository;
pub use post::PostgresPostRepository;
pub use user::PostgresUserRepository;
