pub mod number;

pub use number::{format_number_into, is_exact_integer, parse_number};
