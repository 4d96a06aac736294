pub mod issues;
pub mod repository;
pub mod search;
