/// Column storage class as declared in the DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Varchar(u16),
    Text,
}

impl SqlType {
    fn ddl(self) -> String {
        match self {
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::Varchar(len) => format!("VARCHAR({len})"),
            SqlType::Text => "TEXT".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
    pub primary_key: bool,
    /// Literal default applied by the store when the insert omits the column.
    pub default: Option<&'static str>,
    /// `table(column)` target of a declared foreign key.
    pub references: Option<&'static str>,
}

impl Column {
    pub const fn id() -> Self {
        Column {
            name: "id",
            sql_type: SqlType::Integer,
            nullable: false,
            primary_key: true,
            default: None,
            references: None,
        }
    }

    pub const fn new(name: &'static str, sql_type: SqlType) -> Self {
        Column {
            name,
            sql_type,
            nullable: true,
            primary_key: false,
            default: None,
            references: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub const fn default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub const fn references(mut self, target: &'static str) -> Self {
        self.references = Some(target);
        self
    }

    fn ddl(&self) -> String {
        let mut def = format!("{} {}", self.name, self.sql_type.ddl());
        if self.primary_key {
            // INTEGER PRIMARY KEY aliases the rowid, so ids auto-increment.
            def.push_str(" PRIMARY KEY");
        } else if !self.nullable {
            def.push_str(" NOT NULL");
        }
        if let Some(value) = self.default {
            def.push_str(&format!(" DEFAULT '{}'", value.replace('\'', "''")));
        }
        if let Some(target) = self.references {
            def.push_str(&format!(" REFERENCES {target}"));
        }
        def
    }
}

/// Mapping descriptor for one persisted entity.
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl Table {
    pub fn create_sql(&self) -> String {
        let columns: Vec<String> = self.columns.iter().map(Column::ddl).collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.name,
            columns.join(", ")
        )
    }

    /// Columns written on insert; the primary key is left to the store.
    pub fn insert_columns(&self) -> impl Iterator<Item = &'static Column> {
        self.columns.iter().filter(|c| !c.primary_key)
    }

    pub fn insert_sql(&self) -> String {
        let names: Vec<&str> = self.insert_columns().map(|c| c.name).collect();
        let placeholders = vec!["?"; names.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            self.name,
            names.join(", ")
        )
    }

    /// Full-table read in whatever order the store returns rows.
    pub fn select_all_sql(&self) -> String {
        let names: Vec<&str> = self.columns.iter().map(|c| c.name).collect();
        format!("SELECT {} FROM {}", names.join(", "), self.name)
    }

    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM {}", self.name)
    }
}

/// Literal value of a seed row, in insert-column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedValue {
    Int(i64),
    Text(&'static str),
}
