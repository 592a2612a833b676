mod inspect;
mod validate;

pub use inspect::inspect_command;
pub use validate::{OutputFormat, validate_command};
