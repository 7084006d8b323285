use sqlx::FromRow;

use crate::models::{Entity, Field, View};
use crate::schema::{Column, SeedValue, SqlType, Table};

#[derive(Debug, Clone, FromRow)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub contact_info: Option<String>,
    pub skills: Option<String>,
    #[allow(dead_code)]
    pub qualifications: Option<String>,
    #[allow(dead_code)]
    pub experience: Option<String>,
}

impl Entity for Candidate {
    const TABLE: Table = Table {
        name: "candidate",
        columns: &[
            Column::id(),
            Column::new("name", SqlType::Varchar(100)).required(),
            Column::new("contact_info", SqlType::Varchar(255)),
            Column::new("skills", SqlType::Text),
            Column::new("qualifications", SqlType::Text),
            Column::new("experience", SqlType::Text),
        ],
    };

    const SEED: &'static [SeedValue] = &[
        SeedValue::Text("John Doe"),
        SeedValue::Text("john@example.com"),
        SeedValue::Text("Python, Flask, SQLAlchemy"),
        SeedValue::Text("B.Sc. Computer Science"),
        SeedValue::Text("3 years"),
    ];

    const VIEW: View<Self> = View {
        path: "/candidates",
        title: "Candidates",
        fields: &[
            Field {
                label: "ID",
                value: |c| Some(c.id.to_string()),
            },
            Field {
                label: "Name",
                value: |c| Some(c.name.clone()),
            },
            Field {
                label: "Contact",
                value: |c| c.contact_info.clone(),
            },
            Field {
                label: "Skills",
                value: |c| c.skills.clone(),
            },
        ],
    };
}
