//! Configuration read from the process environment.

pub mod db;
