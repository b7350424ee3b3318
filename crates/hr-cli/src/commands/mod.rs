pub mod db;
pub mod dispatch;
pub mod export;
pub mod report;
pub mod reports;
pub mod schema;
pub mod shared;
