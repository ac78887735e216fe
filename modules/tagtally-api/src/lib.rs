pub mod aggregate;
pub mod dispatch;
pub mod partition;
pub mod routes;
pub mod validate;
