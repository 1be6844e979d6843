pub mod commands;
pub mod entity;
pub mod queries;
pub mod repository;
pub mod services;
