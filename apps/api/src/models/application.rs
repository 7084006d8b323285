use sqlx::FromRow;

use crate::models::{Entity, Field, View};
use crate::schema::{Column, SeedValue, SqlType, Table};

/// A candidate's application to a job listing.
///
/// Both references are declared in the schema but never checked at runtime.
#[derive(Debug, Clone, FromRow)]
pub struct Application {
    pub id: i64,
    pub candidate_id: i64,
    pub job_id: i64,
    pub status: Option<String>,
}

impl Entity for Application {
    const TABLE: Table = Table {
        name: "application",
        columns: &[
            Column::id(),
            Column::new("candidate_id", SqlType::Integer)
                .required()
                .references("candidate(id)"),
            Column::new("job_id", SqlType::Integer)
                .required()
                .references("job_listing(id)"),
            Column::new("status", SqlType::Varchar(50)).default("Pending"),
        ],
    };

    const SEED: &'static [SeedValue] = &[
        SeedValue::Int(1),
        SeedValue::Int(1),
        SeedValue::Text("Pending"),
    ];

    const VIEW: View<Self> = View {
        path: "/applications",
        title: "Applications",
        fields: &[
            Field {
                label: "ID",
                value: |a| Some(a.id.to_string()),
            },
            Field {
                label: "Candidate ID",
                value: |a| Some(a.candidate_id.to_string()),
            },
            Field {
                label: "Job ID",
                value: |a| Some(a.job_id.to_string()),
            },
            Field {
                label: "Status",
                value: |a| a.status.clone(),
            },
        ],
    };
}
