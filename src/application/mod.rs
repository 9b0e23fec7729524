// Application layer - Use cases and ports
pub mod grid_builder;
pub mod section_repository;
pub mod timetable_service;
