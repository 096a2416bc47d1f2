pub mod auth;
pub mod catalog;
pub mod cms;
pub mod quotes;
pub mod rbac;
pub mod sales;
pub mod staff;
