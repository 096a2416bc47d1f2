// src/handlers.rs

pub mod auth;
pub mod catalog;
pub mod cms;
pub mod quotes;
pub mod reports;
pub mod sales;
pub mod staff;
pub mod users;
