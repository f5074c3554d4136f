//! Household - arena owning every person and job

use hecs::{Entity, Ref, RefMut, World};
use tracing::debug;

use crate::components::*;
use crate::error::Result;
use crate::job::Job;
use crate::systems::{self, Family};

pub struct Household {
    world: World,
    next_person_id: u64,
    next_family_id: u64,
}

impl Household {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            next_person_id: 1,
            next_family_id: 1,
        }
    }

    /// Spawn a person with no job and no spouse
    pub fn add_person(&mut self, first_name: &str, last_name: &str, age: u32) -> Entity {
        let id = PersonId(self.next_person_id);
        self.next_person_id += 1;

        let entity = self.world.spawn((
            Person {
                id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            },
            Age::new(age),
        ));
        debug!(person = id.0, age, "person added");
        entity
    }

    pub fn add_job(&mut self, job: Job) -> Entity {
        self.world.spawn((job,))
    }

    pub fn person(&self, person: Entity) -> Result<Ref<'_, Person>> {
        Ok(self.world.get::<&Person>(person)?)
    }

    pub fn age_of(&self, person: Entity) -> Result<u32> {
        Ok(self.world.get::<&Age>(person)?.years)
    }

    pub fn job(&self, job: Entity) -> Result<Ref<'_, Job>> {
        Ok(self.world.get::<&Job>(job)?)
    }

    /// Mutable access for raises. Everyone holding this job sees the change.
    pub fn job_mut(&mut self, job: Entity) -> Result<RefMut<'_, Job>> {
        Ok(self.world.get::<&mut Job>(job)?)
    }

    pub fn job_of(&self, person: Entity) -> Result<Option<Entity>> {
        systems::job_of(&self.world, person)
    }

    pub fn spouse_of(&self, person: Entity) -> Result<Option<Entity>> {
        systems::spouse_of(&self.world, person)
    }

    pub fn assign_job(&mut self, person: Entity, job: Option<Entity>) -> Result<()> {
        systems::assign_job(&mut self.world, person, job)
    }

    pub fn assign_spouse(&mut self, person: Entity, spouse: Option<Entity>) -> Result<()> {
        systems::assign_spouse(&mut self.world, person, spouse)
    }

    /// Marry two unmarried people into a new family
    pub fn form_family(&mut self, spouse1: Entity, spouse2: Entity) -> Result<Family> {
        let family = Family::new(&mut self.world, FamilyId(self.next_family_id), spouse1, spouse2)?;
        self.next_family_id += 1;
        Ok(family)
    }

    pub fn have_child(&self, family: &mut Family, child: Entity) -> bool {
        family.have_child(&self.world, child)
    }

    pub fn household_income(&self, family: &Family, hours_worked: Option<i64>) -> i64 {
        family.household_income(&self.world, hours_worked)
    }

    /// One-line summary of a person. The spouse is named, not described.
    pub fn describe(&self, person: Entity) -> Result<String> {
        let entity = self.world.entity(person)?;
        let who = self.person(person)?;
        let age = self.age_of(person)?;

        let job = match entity.get::<&Employment>() {
            Some(employment) => self.job(employment.0)?.to_string(),
            None => "nil".to_string(),
        };
        let spouse = match entity.get::<&Spouse>() {
            Some(spouse) => self.person(spouse.0)?.full_name(),
            None => "nil".to_string(),
        };

        Ok(format!(
            "[Person: firstName:{} lastName:{} age:{} job:{} spouse:{}]",
            who.first_name, who.last_name, age, job, spouse
        ))
    }

    /// Number of people in the arena
    pub fn population(&self) -> usize {
        self.world.query::<&Person>().iter().count()
    }
}

impl Default for Household {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::JobType;

    #[test]
    fn test_new_person_is_unattached() {
        let mut household = Household::new();
        let ted = household.add_person("Ted", "Neward", 45);

        assert_eq!(household.person(ted).unwrap().first_name, "Ted");
        assert_eq!(household.age_of(ted).unwrap(), 45);
        assert_eq!(household.job_of(ted).unwrap(), None);
        assert_eq!(household.spouse_of(ted).unwrap(), None);
        assert_eq!(household.population(), 1);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut household = Household::new();
        let a = household.add_person("A", "A", 30);
        let b = household.add_person("B", "B", 30);
        assert_eq!(household.person(a).unwrap().id, PersonId(1));
        assert_eq!(household.person(b).unwrap().id, PersonId(2));

        let family = household.form_family(a, b).unwrap();
        assert_eq!(family.id(), FamilyId(1));
    }

    #[test]
    fn test_age_gates() {
        let mut household = Household::new();
        let job = household.add_job(Job::new("Burger-Flipper", JobType::Hourly(5.5)));

        let sixteen = household.add_person("Kid", "A", 16);
        household.assign_job(sixteen, Some(job)).unwrap();
        assert_eq!(household.job_of(sixteen).unwrap(), None);

        let seventeen = household.add_person("Kid", "B", 17);
        household.assign_job(seventeen, Some(job)).unwrap();
        assert_eq!(household.job_of(seventeen).unwrap(), Some(job));

        let eighteen = household.add_person("Kid", "C", 18);
        household.assign_spouse(eighteen, Some(seventeen)).unwrap();
        assert_eq!(household.spouse_of(eighteen).unwrap(), None);
    }

    #[test]
    fn test_spouse_link_is_symmetric() {
        let mut household = Household::new();
        let a = household.add_person("A", "A", 19);
        let b = household.add_person("B", "B", 19);

        household.form_family(a, b).unwrap();
        assert_eq!(household.spouse_of(a).unwrap(), Some(b));
        assert_eq!(household.spouse_of(b).unwrap(), Some(a));
    }

    #[test]
    fn test_failed_family_keeps_counter() {
        let mut household = Household::new();
        let a = household.add_person("A", "A", 30);
        let b = household.add_person("B", "B", 30);
        let c = household.add_person("C", "C", 30);
        let d = household.add_person("D", "D", 30);

        household.form_family(a, b).unwrap();
        assert!(household.form_family(b, c).is_err());
        let family = household.form_family(c, d).unwrap();
        assert_eq!(family.id(), FamilyId(2));
    }

    #[test]
    fn test_raise_visible_to_family() {
        let mut household = Household::new();
        let a = household.add_person("A", "A", 30);
        let b = household.add_person("B", "B", 30);
        let family = household.form_family(a, b).unwrap();

        let job = household.add_job(Job::new("Guest Lecturer", JobType::Hourly(10.0)));
        household.assign_job(a, Some(job)).unwrap();
        assert_eq!(household.household_income(&family, Some(100)), 1000);

        household.job_mut(job).unwrap().raise_by_percent(0.5);
        assert_eq!(household.household_income(&family, Some(100)), 1500);
    }

    #[test]
    fn test_describe() {
        let mut household = Household::new();
        let ted = household.add_person("Ted", "Neward", 45);
        assert_eq!(
            household.describe(ted).unwrap(),
            "[Person: firstName:Ted lastName:Neward age:45 job:nil spouse:nil]"
        );

        let charlotte = household.add_person("Charlotte", "Neward", 45);
        household.form_family(ted, charlotte).unwrap();
        let job = household.add_job(Job::new("Guest Lecturer", JobType::Salary(1000)));
        household.assign_job(ted, Some(job)).unwrap();

        assert_eq!(
            household.describe(ted).unwrap(),
            "[Person: firstName:Ted lastName:Neward age:45 \
             job:[Job: title:Guest Lecturer type:Salary(1000)] spouse:Charlotte Neward]"
        );
    }

    #[test]
    fn test_family_of_four() {
        let mut household = Household::new();
        let mike = household.add_person("Mike", "Neward", 22);
        let matt = household.add_person("Matt", "Neward", 16);
        let ted = household.add_person("Ted", "Neward", 45);
        let charlotte = household.add_person("Charlotte", "Neward", 45);

        let mut family = household.form_family(ted, charlotte).unwrap();
        assert!(household.have_child(&mut family, mike));
        assert!(household.have_child(&mut family, matt));
        assert_eq!(family.len(), 4);

        let lecturer = household.add_job(Job::new("Guest Lecturer", JobType::Salary(1000)));
        let janitor = household.add_job(Job::new("Janitor", JobType::Hourly(15.0)));
        let intern = household.add_job(Job::new("Intern", JobType::Hourly(8.0)));
        household.assign_job(ted, Some(lecturer)).unwrap();
        household.assign_job(mike, Some(janitor)).unwrap();
        household.assign_job(matt, Some(intern)).unwrap();

        // Matt is too young to work
        assert_eq!(household.household_income(&family, None), 1000 + 30_000);
    }
}
