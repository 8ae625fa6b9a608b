pub mod cli_args;
pub mod error;
mod extractor;
mod middleware;
pub mod openapi;
mod route;
pub mod server;
mod state;
pub mod violation;
