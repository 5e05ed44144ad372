//! Educational legal Q&A: an actix-web server answering `POST /api/answer`,
//! and a client-side submission handler that talks to it.

pub mod client;
pub mod config;
pub mod model;
pub mod web;
