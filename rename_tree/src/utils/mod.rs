pub mod get_args;
pub mod rename;
