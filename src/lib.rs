pub mod cli_args;
pub mod error;
mod extractor;
mod middleware;
mod repo;
mod route;
pub mod server;
mod state;

#[cfg(test)]
mod test;
