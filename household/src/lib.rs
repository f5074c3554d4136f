//! Household Model
//!
//! Money with fixed-rate currency conversion, jobs, and the people and
//! families that hold them. People and jobs live in an ECS arena; spouse and
//! employment links are components pointing at other entities.

pub mod components;
pub mod error;
pub mod job;
pub mod money;
pub mod systems;
pub mod world;

pub use components::*;
pub use error::{HouseholdError, Result};
pub use hecs::Entity;
pub use job::{Job, JobType};
pub use money::{Currency, Money};
pub use systems::Family;
pub use world::Household;
