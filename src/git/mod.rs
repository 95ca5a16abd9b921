pub mod repo;
pub mod runner;
