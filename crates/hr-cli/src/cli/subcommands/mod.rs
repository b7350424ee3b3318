pub mod db;

pub use db::{DbCommands, SeedArgs};
