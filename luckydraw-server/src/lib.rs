//! Router construction for the lucky draw service, split out so
//! integration tests can drive the HTTP surface without a socket.

pub mod routes;

pub use routes::router;
