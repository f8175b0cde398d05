pub mod extract_gene;
pub mod get_args;
