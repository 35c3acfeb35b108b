//! Network layer: REST API helpers over the server's JSON API.

pub mod api;
