pub mod db;
pub mod client;
pub mod service_area;
