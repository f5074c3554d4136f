//! ECS Components for household entities
//!
//! People and jobs are entities in the household arena. Relations between
//! them (employment, marriage) are components holding the other entity.

use std::fmt;

use hecs::Entity;

// ============================================================================
// Identity Components
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FamilyId(pub u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Person Components
// ============================================================================

/// Name and identity of a person. Fixed once spawned.
#[derive(Debug, Clone)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Age in whole years. Nobody ages inside the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age {
    pub years: u32,
}

impl Age {
    pub fn new(years: u32) -> Self {
        Self { years }
    }
}

// ============================================================================
// Relation Components
// ============================================================================

/// Person holds the job entity. Several people may share one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Employment(pub Entity);

/// Person is married to the referenced person entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spouse(pub Entity);
