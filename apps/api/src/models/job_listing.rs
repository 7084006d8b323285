use sqlx::FromRow;

use crate::models::{Entity, Field, View};
use crate::schema::{Column, SeedValue, SqlType, Table};

#[derive(Debug, Clone, FromRow)]
pub struct JobListing {
    pub id: i64,
    pub company_name: String,
    #[allow(dead_code)]
    pub job_description: Option<String>,
    #[allow(dead_code)]
    pub required_skills: Option<String>,
    pub salary: Option<String>,
    /// Free text; the store fills in "Open" when omitted.
    pub status: Option<String>,
}

impl Entity for JobListing {
    const TABLE: Table = Table {
        name: "job_listing",
        columns: &[
            Column::id(),
            Column::new("company_name", SqlType::Varchar(255)).required(),
            Column::new("job_description", SqlType::Text),
            Column::new("required_skills", SqlType::Text),
            Column::new("salary", SqlType::Varchar(50)),
            Column::new("status", SqlType::Varchar(10)).default("Open"),
        ],
    };

    const SEED: &'static [SeedValue] = &[
        SeedValue::Text("Acme Corp"),
        SeedValue::Text("Software Developer position"),
        SeedValue::Text("Python, SQL, REST APIs"),
        SeedValue::Text("$50,000"),
        SeedValue::Text("Open"),
    ];

    const VIEW: View<Self> = View {
        path: "/job_listings",
        title: "Job Listings",
        fields: &[
            Field {
                label: "ID",
                value: |j| Some(j.id.to_string()),
            },
            Field {
                label: "Company",
                value: |j| Some(j.company_name.clone()),
            },
            Field {
                label: "Salary",
                value: |j| j.salary.clone(),
            },
            Field {
                label: "Status",
                value: |j| j.status.clone(),
            },
        ],
    };
}
