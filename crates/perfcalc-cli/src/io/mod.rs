// crates/perfcalc-cli/src/io/mod.rs

pub mod api;
pub mod cache;
pub mod output;
