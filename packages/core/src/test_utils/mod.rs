pub mod db;
pub mod entity;
