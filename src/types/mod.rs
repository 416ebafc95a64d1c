pub mod config;
pub mod department;
pub mod report;
pub mod scoring;
