pub mod bases;
pub mod error;
pub mod gene_key;
pub mod name_reconciler;
pub mod record;
pub mod representative;
pub mod screen;
pub mod struct_helper;
