pub mod domain;
pub mod dto;
pub mod factory;
pub mod isbn;
pub mod repository;
