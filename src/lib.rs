pub mod catalog;
pub mod commands;
pub mod error;
pub mod http;
pub mod index;
pub mod render;
pub mod runtime;
pub mod source;
