pub mod date;
pub mod validation;
