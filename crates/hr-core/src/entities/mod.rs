//! Entity structs for the five relations of the HR store.
//!
//! Each entity maps to one table (see `hr-db/migrations/001_schema.sql`).
//! The report layer only reads these tables; the structs are used by the
//! seeder and by tests that insert fixtures.

mod department;
mod employee;
mod project;
mod review;

pub use department::Department;
pub use employee::Employee;
pub use project::{EmployeeProjectLog, Project};
pub use review::PerformanceReview;
