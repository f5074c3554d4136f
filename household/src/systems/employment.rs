//! Employment System
//!
//! Attaches jobs to people old enough to hold one.

use hecs::{Entity, World};
use tracing::debug;

use crate::components::{Age, Employment};
use crate::error::Result;
use crate::job::Job;

/// People at or below this age cannot hold a job
pub const MIN_WORKING_AGE: u32 = 16;

/// Set or clear a person's job.
///
/// Below the working age the person ends up without a job, whatever was
/// requested. Errors only when an entity is missing from the world.
pub fn assign_job(world: &mut World, person: Entity, job: Option<Entity>) -> Result<()> {
    let age = world.get::<&Age>(person)?.years;

    match job {
        Some(job) if age > MIN_WORKING_AGE => {
            world.get::<&Job>(job)?;
            world.insert_one(person, Employment(job))?;
        }
        requested => {
            if requested.is_some() {
                debug!(?person, age, "too young to work, clearing job");
            }
            let _ = world.remove_one::<Employment>(person);
        }
    }

    Ok(())
}

/// The job entity held by `person`, if any
pub fn job_of(world: &World, person: Entity) -> Result<Option<Entity>> {
    let entity = world.entity(person)?;
    Ok(entity.get::<&Employment>().map(|employment| employment.0))
}
