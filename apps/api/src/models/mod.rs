pub mod application;
pub mod candidate;
pub mod job_listing;
pub mod training_program;

use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

use crate::schema::{SeedValue, Table};

pub use application::Application;
pub use assessment_test::AssessmentTest;
pub use candidate::Candidate;
pub use job_listing::JobListing;
pub use training_program::TrainingProgram;

/// One display column of a list page: header label and the value it projects.
pub struct Field<T> {
    pub label: &'static str,
    pub value: fn(&T) -> Option<String>,
}

/// How an entity is exposed over HTTP.
pub struct View<T: 'static> {
    pub path: &'static str,
    pub title: &'static str,
    pub fields: &'static [Field<T>],
}

impl<T: 'static> View<T> {
    pub fn labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.label).collect()
    }

    /// Projects a record into display cells; absent values become empty cells.
    pub fn project(&self, record: &T) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| (f.value)(record).unwrap_or_default())
            .collect()
    }
}

/// A persisted record type: its table mapping, its sample row, and its list view.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + Sized + 'static {
    const TABLE: Table;
    /// Values for every non-key column, in declaration order.
    const SEED: &'static [SeedValue];
    const VIEW: View<Self>;
}

/// Path and title of every entity, in landing-page order.
pub fn index() -> [(&'static str, &'static str); 5] {
    [
        link::<Candidate>(),
        link::<JobListing>(),
        link::<TrainingProgram>(),
        link::<AssessmentTest>(),
        link::<Application>(),
    ]
}

fn link<E: Entity>() -> (&'static str, &'static str) {
    (E::VIEW.path, E::VIEW.title)
}
