//! rosterdb - in-memory student/course enrollment store with a REST API

pub mod cli;
pub mod rest_api;
pub mod storage;
