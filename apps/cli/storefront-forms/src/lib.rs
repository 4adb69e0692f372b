pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod terminal;

#[cfg(test)]
mod tests;
