use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use skillet::{
    schema::{self, Field},
    stmt::Value,
    CreateMany, Error, Model, Result,
};
use skillet_driver_sqlite::{Connection, Sqlite};
use std::sync::LazyLock;

static TASK_SCHEMA: LazyLock<schema::Model> = LazyLock::new(|| {
    schema::Model::builder("Task", "tasks")
        .field(Field::new("id").primary_key())
        .field(Field::new("title"))
        .field(Field::new("priority").default_value(3i64))
        .field(Field::new("created_at"))
        .field(Field::new("updated_at"))
        .build()
});

#[derive(Debug, Default, Clone)]
struct Task {
    id: i64,
    title: String,
    priority: i64,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl Model for Task {
    fn schema() -> &'static schema::Model {
        &TASK_SCHEMA
    }

    fn get(&self, index: usize) -> Value {
        match index {
            0 => self.id.into(),
            1 => (&self.title).into(),
            2 => self.priority.into(),
            3 => self.created_at.into(),
            4 => self.updated_at.into(),
            _ => Value::Null,
        }
    }

    fn set(&mut self, index: usize, value: Value) -> Result<()> {
        match (index, value) {
            (0, Value::I64(value)) => self.id = value,
            (1, Value::String(value)) => self.title = value,
            (2, Value::I64(value)) => self.priority = value,
            (3, Value::Timestamp(value)) => self.created_at = Some(value),
            (4, Value::Timestamp(value)) => self.updated_at = Some(value),
            (index, value) => {
                return Err(Error::invalid_target(format!(
                    "cannot assign {value:?} to field {index} of Task"
                )))
            }
        }
        Ok(())
    }
}

fn task(title: &str) -> Task {
    Task {
        title: title.to_string(),
        ..Default::default()
    }
}

fn connect() -> Connection {
    let mut conn = Sqlite::in_memory().connect().unwrap();
    conn.execute_batch(
        "CREATE TABLE tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL UNIQUE,
            priority INTEGER NOT NULL,
            created_at TEXT,
            updated_at TEXT
        )",
    )
    .unwrap();
    conn
}

#[test]
fn blank_keys_use_autoincrement() {
    let mut conn = connect();
    let mut tasks = vec![task("one"), task("two"), task("three")];

    let rows = CreateMany::new(&mut tasks).exec(&mut conn).unwrap();
    assert_eq!(rows, 3);

    let stored = conn
        .query("SELECT id, title, priority FROM tasks ORDER BY id", &[])
        .unwrap();
    assert_eq!(
        stored,
        vec![
            vec![Value::I64(1), Value::from("one"), Value::I64(3)],
            vec![Value::I64(2), Value::from("two"), Value::I64(3)],
            vec![Value::I64(3), Value::from("three"), Value::I64(3)],
        ]
    );
}

#[test]
fn preset_keys_are_persisted_as_given() {
    let mut conn = connect();
    let mut tasks = vec![task("one"), task("two")];
    tasks[0].id = 10;
    tasks[1].id = 20;

    CreateMany::new(&mut tasks).exec(&mut conn).unwrap();

    let stored = conn.query("SELECT id FROM tasks ORDER BY id", &[]).unwrap();
    assert_eq!(stored, vec![vec![Value::I64(10)], vec![Value::I64(20)]]);
}

#[test]
fn stamped_timestamps_round_trip() {
    let mut conn = connect();
    let mut tasks = vec![task("one")];

    CreateMany::new(&mut tasks).exec(&mut conn).unwrap();

    let stamped = tasks[0].created_at.unwrap();
    let stored = conn
        .query("SELECT created_at, updated_at FROM tasks", &[])
        .unwrap();
    assert_eq!(stored[0][0], Value::String(stamped.to_rfc3339()));
    assert_eq!(stored[0][1], Value::String(stamped.to_rfc3339()));
}

#[test]
fn conflicting_batch_inserts_nothing() {
    let mut conn = connect();
    let mut tasks = vec![task("dup"), task("dup")];

    let err = CreateMany::new(&mut tasks).exec(&mut conn).unwrap_err();
    assert!(err.is_driver_operation_failed());

    let stored = conn.query("SELECT COUNT(*) FROM tasks", &[]).unwrap();
    assert_eq!(stored, vec![vec![Value::I64(0)]]);
}

#[test]
fn insert_option_skips_conflicting_rows() {
    let mut conn = connect();

    let mut first = vec![task("one")];
    CreateMany::new(&mut first).exec(&mut conn).unwrap();

    let mut second = vec![task("one"), task("two")];
    let rows = CreateMany::new(&mut second)
        .insert_option("ON CONFLICT DO NOTHING")
        .exec(&mut conn)
        .unwrap();
    assert_eq!(rows, 1);

    let stored = conn
        .query("SELECT title FROM tasks ORDER BY id", &[])
        .unwrap();
    assert_eq!(
        stored,
        vec![vec![Value::from("one")], vec![Value::from("two")]]
    );
}
