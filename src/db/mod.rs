pub mod dbpool;

pub use dbpool::DbPool;
