pub mod constants;
pub mod distance;
pub mod hospitals;
pub mod risk;
