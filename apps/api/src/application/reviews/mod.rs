pub mod command_service;
pub mod dto;
pub mod query_service;
