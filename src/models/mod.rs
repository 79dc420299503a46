pub mod accident;
pub mod coordinate;
pub mod dataset;
pub mod emergency;
pub mod hospital;
pub mod responses;
pub mod risk;
pub mod weather;
