pub mod string;

pub use string::{decode_string, escape_string_into};
