pub mod edge;
pub mod filter_table;
