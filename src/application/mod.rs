pub mod dto;
pub mod ports;
pub mod sanitize;
pub mod use_cases;
pub mod validation;
