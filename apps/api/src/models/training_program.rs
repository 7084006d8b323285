use sqlx::FromRow;

use crate::models::{Entity, Field, View};
use crate::schema::{Column, SeedValue, SqlType, Table};

#[derive(Debug, Clone, FromRow)]
pub struct TrainingProgram {
    pub id: i64,
    pub program_name: String,
    #[allow(dead_code)]
    pub description: Option<String>,
    #[allow(dead_code)]
    pub skills_covered: Option<String>,
    pub institution_partnered: Option<String>,
}

impl Entity for TrainingProgram {
    const TABLE: Table = Table {
        name: "training_program",
        columns: &[
            Column::id(),
            Column::new("program_name", SqlType::Varchar(255)).required(),
            Column::new("description", SqlType::Text),
            Column::new("skills_covered", SqlType::Text),
            Column::new("institution_partnered", SqlType::Varchar(255)),
        ],
    };

    const SEED: &'static [SeedValue] = &[
        SeedValue::Text("Python Bootcamp"),
        SeedValue::Text("Intensive training in Python and Flask."),
        SeedValue::Text("Python, Flask, SQLAlchemy"),
        SeedValue::Text("Tech Institute"),
    ];

    const VIEW: View<Self> = View {
        path: "/training_programs",
        title: "Training Programs",
        fields: &[
            Field {
                label: "ID",
                value: |t| Some(t.id.to_string()),
            },
            Field {
                label: "Program",
                value: |t| Some(t.program_name.clone()),
            },
            Field {
                label: "Institution",
                value: |t| t.institution_partnered.clone(),
            },
        ],
    };
}
