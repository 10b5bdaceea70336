pub mod routes;
pub mod transformer;
