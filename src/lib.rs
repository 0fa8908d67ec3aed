pub mod bot;
pub mod commands;
pub mod config;
pub mod deepseek;
pub mod error;
pub mod mention;
pub mod plugin;
pub mod tools;
pub mod types;

#[cfg(test)]
mod test_support;

pub use bot::run;
