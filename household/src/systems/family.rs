//! Family System
//!
//! Handles family formation, children, and household income.

use hecs::{Entity, World};
use tracing::debug;

use crate::components::{Age, Employment, FamilyId};
use crate::error::Result;
use crate::job::Job;
use crate::systems::marriage;

/// A family needs a member at least this old before it can have children
pub const ADULT_AGE: u32 = 21;

/// Hours basis for hourly jobs when none is given (one working year)
pub const DEFAULT_HOURS_WORKED: i64 = 2000;

/// Two spouses followed by their children, in the order they joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    id: FamilyId,
    members: Vec<Entity>,
}

impl Family {
    /// Marry `spouse1` and `spouse2` and start a family with them.
    ///
    /// Fails without touching either person when one of them already has a
    /// spouse or lacks a `Person` or `Age` component.
    pub fn new(world: &mut World, id: FamilyId, spouse1: Entity, spouse2: Entity) -> Result<Self> {
        marriage::marry(world, spouse1, spouse2)?;
        debug!(family = id.0, "family formed");

        Ok(Self {
            id,
            members: vec![spouse1, spouse2],
        })
    }

    pub fn id(&self) -> FamilyId {
        self.id
    }

    pub fn members(&self) -> &[Entity] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Add `child` if any member is an adult. Returns whether it was added.
    pub fn have_child(&mut self, world: &World, child: Entity) -> bool {
        let has_adult = self.members.iter().any(|&member| {
            world
                .get::<&Age>(member)
                .map(|age| age.years >= ADULT_AGE)
                .unwrap_or(false)
        });

        if !has_adult {
            debug!(family = self.id.0, "no adult in family, child refused");
            return false;
        }

        self.members.push(child);
        true
    }

    /// Total income of every employed member over `hours_worked`
    /// (default [`DEFAULT_HOURS_WORKED`]). Saturates at `i64::MAX`.
    pub fn household_income(&self, world: &World, hours_worked: Option<i64>) -> i64 {
        let hours = hours_worked.unwrap_or(DEFAULT_HOURS_WORKED);

        self.members
            .iter()
            .filter_map(|&member| {
                let job = world.get::<&Employment>(member).ok()?.0;
                let income = world.get::<&Job>(job).ok()?.calculate_income(hours);
                Some(income)
            })
            .fold(0i64, i64::saturating_add)
    }
}
