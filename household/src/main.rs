//! Household demo
//!
//! Builds a sample family and logs what it earns.

use household::{Household, Job, JobType, Money};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut household = Household::new();

    let ted = household.add_person("Ted", "Neward", 45);
    let charlotte = household.add_person("Charlotte", "Neward", 45);
    let mike = household.add_person("Mike", "Neward", 22);
    let matt = household.add_person("Matt", "Neward", 16);

    let mut family = household.form_family(ted, charlotte)?;
    household.have_child(&mut family, mike);
    household.have_child(&mut family, matt);

    let lecturer = household.add_job(Job::new("Guest Lecturer", JobType::Salary(1000)));
    let janitor = household.add_job(Job::new("Janitor", JobType::Hourly(15.0)));
    household.assign_job(ted, Some(lecturer))?;
    household.assign_job(mike, Some(janitor))?;
    household.assign_job(matt, Some(janitor))?;

    for &member in family.members() {
        info!("{}", household.describe(member)?);
    }

    let income = household.household_income(&family, None);
    info!("Household income: {}", income);

    household.job_mut(janitor)?.raise_by_percent(0.1);
    info!(
        "After a 10% raise for the janitor: {}",
        household.household_income(&family, None)
    );

    let in_gbp = Money::new(income, "USD")?.convert("GBP")?;
    info!("Household income in GBP: {}", in_gbp);

    Ok(())
}
