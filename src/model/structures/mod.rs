pub mod aggregate;
pub mod position;
pub mod processing;
pub mod records;
pub mod stat_column;
pub mod weight_profile;
