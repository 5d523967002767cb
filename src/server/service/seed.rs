//! One-time population of sample data.
//!
//! On startup the store is seeded with the school's activity catalog, but only when no
//! activity exists yet, so restarting against the same database never duplicates data.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{activity::ActivityRepository, signup::SignupRepository, student::StudentRepository},
    error::AppError,
    model::activity::CreateActivityParam,
};

/// A catalog entry: the activity and the emails of its initial participants.
pub struct SeedActivity {
    pub name: &'static str,
    pub description: &'static str,
    pub schedule: &'static str,
    pub max_participants: i32,
    pub participants: &'static [&'static str],
}

pub const SAMPLE_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Practice and play basketball with the school team",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore your creativity through painting and drawing",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["amelia@mergington.edu", "harper@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &["ella@mergington.edu", "scarlett@mergington.edu"],
    },
    SeedActivity {
        name: "Math Club",
        description: "Solve challenging problems and participate in math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: &["james@mergington.edu", "benjamin@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &["charlotte@mergington.edu", "henry@mergington.edu"],
    },
];

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds the sample catalog if the store holds no activities.
    ///
    /// # Returns
    /// - `Ok(true)`: Catalog inserted
    /// - `Ok(false)`: Activities already present, nothing written
    /// - `Err(AppError::DbErr)`: Database error, nothing written
    pub async fn seed_if_empty(&self) -> Result<bool, AppError> {
        self.seed_if_empty_with(SAMPLE_ACTIVITIES).await
    }

    /// Seeds the given catalog if the store holds no activities.
    ///
    /// All inserts happen in one transaction.
    pub async fn seed_if_empty_with(&self, catalog: &[SeedActivity]) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let activity_repo = ActivityRepository::new(&txn);
        if activity_repo.any_exists().await? {
            tracing::debug!("Activities already present, skipping seed");
            return Ok(false);
        }

        let student_repo = StudentRepository::new(&txn);
        let signup_repo = SignupRepository::new(&txn);

        for entry in catalog {
            let activity = activity_repo
                .create(CreateActivityParam {
                    name: entry.name.to_string(),
                    description: Some(entry.description.to_string()),
                    schedule: Some(entry.schedule.to_string()),
                    max_participants: entry.max_participants,
                })
                .await?;

            for email in entry.participants {
                let student = student_repo.find_or_create(email).await?;
                signup_repo.create(activity.id, student.id).await?;
            }
        }

        txn.commit().await?;

        tracing::info!("Seeded {} sample activities", catalog.len());

        Ok(true)
    }
}
