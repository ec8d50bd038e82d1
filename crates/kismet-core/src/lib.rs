//! World, interactions, and the monthly cycle for the Kismet simulation.
//!
//! This crate owns the six-phase month that drives the simulation:
//! Calendar, Desires, Planning, Interactions, Solo, and Diary.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `kismet-config.yaml` into
//!   strongly-typed structs.
//! - [`interaction`] -- Proposal resolution and outcome application.
//! - [`runner`] -- [`run_full_simulation`] and history recording.
//! - [`tick`] -- The monthly cycle ([`run_month`]).
//! - [`world`] -- [`World`] and [`AgentOverride`].
//!
//! [`run_full_simulation`]: runner::run_full_simulation
//! [`run_month`]: tick::run_month
//! [`World`]: world::World
//! [`AgentOverride`]: world::AgentOverride

pub mod config;
pub mod interaction;
pub mod runner;
pub mod tick;
pub mod world;
