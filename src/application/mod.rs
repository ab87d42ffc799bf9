// Application layer - Use cases and collaborator traits
pub mod dashboard_service;
pub mod error;
pub mod layout_service;
pub mod layout_storage;
pub mod widget_api;
