// Presentation layer: form capture, rendering and the status endpoint.

pub mod form;
pub mod health;
pub mod render;

#[cfg(feature = "server")]
pub mod server;
