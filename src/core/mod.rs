pub mod checksum;
pub mod digits;
pub mod formatter;
pub mod validator;

pub use checksum::checksum;
pub use digits::parse_digits;
pub use formatter::{dotless_format, dotted_format, format_number};
pub use validator::{is_valid, validate};
