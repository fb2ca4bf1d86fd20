//! Survival Sim - step-based survival environment with an advisory collaborator

pub mod actions;
pub mod advisory;
pub mod core;
pub mod entity;
pub mod simulation;
