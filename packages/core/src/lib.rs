pub mod config;
pub mod db;
pub mod entities;
pub mod logging;
pub mod services;
pub mod tasks;

#[cfg(test)]
mod test_utils;
