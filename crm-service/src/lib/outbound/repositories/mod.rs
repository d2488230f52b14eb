pub mod catalog;
pub mod client;
pub mod memory;
pub mod order;
pub mod product;
pub mod user;

pub use catalog::PostgresCatalogRepository;
pub use client::PostgresClientRepository;
pub use order::PostgresOrderRepository;
pub use product::PostgresProductRepository;
pub use user::PostgresUserRepository;
