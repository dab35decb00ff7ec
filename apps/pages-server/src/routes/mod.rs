//! Route modules for Pages Server

pub mod health;
pub mod pages;
