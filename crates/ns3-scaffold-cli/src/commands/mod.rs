//! CLI command implementations for create-ns3-project.

pub mod create;
