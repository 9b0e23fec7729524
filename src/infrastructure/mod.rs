// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod html_table;
pub mod rest_repository;
