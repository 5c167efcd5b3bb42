pub mod column_grid;
pub mod difficulty;
pub mod float_ext;
pub mod interpolate;
pub mod search;
pub mod smooth;
