pub mod dataset;
pub mod record;
