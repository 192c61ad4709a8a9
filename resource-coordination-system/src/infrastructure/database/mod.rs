mod db;
mod orm;

pub use db::Database;
pub use orm::OrmRepo;
