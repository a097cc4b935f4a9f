pub mod context;
pub mod handler;
pub mod prediction_result;
