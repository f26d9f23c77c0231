pub mod day;
pub mod decimal;
pub mod field;
pub mod record_set;
pub mod schema;
pub mod totals;
pub mod variant;
