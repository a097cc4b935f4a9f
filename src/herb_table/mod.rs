pub mod knowledge_table;
pub mod record;
