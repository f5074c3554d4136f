//! Marriage System
//!
//! Spouse links between people, gated by marriage age.

use hecs::{Entity, World};
use tracing::debug;

use crate::components::{Age, Person, Spouse};
use crate::error::{HouseholdError, Result};

/// People at or below this age cannot be married
pub const MIN_MARRIAGE_AGE: u32 = 18;

/// Set or clear one side of a spouse link.
///
/// Only `person` is updated. Below the marriage age the link is cleared
/// instead.
pub fn assign_spouse(world: &mut World, person: Entity, spouse: Option<Entity>) -> Result<()> {
    let age = world.get::<&Age>(person)?.years;

    match spouse {
        Some(spouse) if age > MIN_MARRIAGE_AGE => {
            world.get::<&Person>(spouse)?;
            world.insert_one(person, Spouse(spouse))?;
        }
        requested => {
            if requested.is_some() {
                debug!(?person, age, "too young to marry, clearing spouse");
            }
            let _ = world.remove_one::<Spouse>(person);
        }
    }

    Ok(())
}

pub fn spouse_of(world: &World, person: Entity) -> Result<Option<Entity>> {
    let entity = world.entity(person)?;
    Ok(entity.get::<&Spouse>().map(|spouse| spouse.0))
}

/// Link two unmarried people to each other.
///
/// Fails if either already has a spouse or is not a complete person. Both
/// are checked before any link is written. Each side is still subject to the
/// marriage age, so an underage partner leaves the link one-sided.
pub fn marry(world: &mut World, a: Entity, b: Entity) -> Result<()> {
    for person in [a, b] {
        let id = world.get::<&Person>(person)?.id;
        world.get::<&Age>(person)?;
        if spouse_of(world, person)?.is_some() {
            return Err(HouseholdError::AlreadyMarried(id));
        }
    }

    assign_spouse(world, a, Some(b))?;
    assign_spouse(world, b, Some(a))?;
    debug!(?a, ?b, "married");
    Ok(())
}
