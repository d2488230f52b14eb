pub mod catalog;
pub mod client;
pub mod dashboard;
pub mod order;
pub mod product;
pub mod user;
