pub mod catalog;
pub mod png;
pub mod sink;
