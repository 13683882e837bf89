pub mod context;
pub mod date_norm;
pub mod demo;
pub mod details;
pub mod filter;
pub mod form;
pub mod gateway;
pub mod log;
pub mod table;
