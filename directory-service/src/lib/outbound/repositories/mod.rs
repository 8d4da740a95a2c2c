pub mod admin;
pub mod employee;

pub use admin::PostgresAdminRepository;
pub use employee::PostgresEmployeeRepository;
