pub mod entity;
pub mod percentile;
pub mod value_objects;
