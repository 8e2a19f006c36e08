//! Shared data contracts for the shop bookkeeping backend and its API clients.

pub mod dashboards;
pub mod domain;
