pub mod either;
pub mod future;

pub mod config;
pub mod users;

pub mod error;
