pub mod emergency;
pub mod hospitals;
pub mod query;
pub mod weather;
