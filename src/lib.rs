pub mod auth;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod storage;

pub use db::create_pool;
