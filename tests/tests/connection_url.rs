use pretty_assertions::assert_eq;
use rowmap::{sqlite::Sqlite, ConnectionExt, Model, RowSourceExt};

#[derive(Debug, Default, PartialEq, Model)]
struct Setting {
    key: String,
    value: Option<String>,
}

#[test]
fn in_memory_url() {
    let db = Sqlite::new("sqlite::memory:").unwrap();
    assert_eq!(db.url(), "sqlite::memory:");
}

#[test]
fn non_sqlite_scheme_is_rejected() {
    let err = Sqlite::new("postgres://localhost/app").unwrap_err();
    assert!(err.is_invalid_connection_url());
    assert_eq!(
        err.to_string(),
        "invalid connection URL \"postgres://localhost/app\": expected the `sqlite` scheme"
    );
}

#[test]
fn unparsable_url_is_rejected() {
    let err = Sqlite::new("not a url").unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[test]
fn open_failure_names_the_path() {
    let path = std::env::temp_dir()
        .join(format!("rowmap-missing-{}", uuid::Uuid::new_v4()))
        .join("app.db");

    let err = Sqlite::open(&path).unwrap_err();
    assert!(err
        .to_string()
        .starts_with(&format!("cannot open SQLite database at {}: ", path.display())));
}

#[test]
fn file_database_persists_between_connections() {
    let path = std::env::temp_dir().join(format!("rowmap-{}.db", uuid::Uuid::new_v4()));
    let setting = Setting {
        key: "theme".to_string(),
        value: Some("dark".to_string()),
    };

    {
        let db = Sqlite::new(format!("sqlite:{}", path.display())).unwrap();
        assert_eq!(db.url(), format!("sqlite:{}", path.display()));

        db.execute_batch("CREATE TABLE settings (key TEXT PRIMARY KEY, value TEXT);")
            .unwrap();
        let insert = db
            .create_command_for(
                "INSERT INTO settings (key, value) VALUES (@key, @value)",
                &setting,
                None,
            )
            .unwrap();
        db.execute(&insert).unwrap();
    }

    let db = Sqlite::open(&path).unwrap();
    let select = db
        .create_command_for("SELECT key, value FROM settings", &setting, None)
        .unwrap();
    let read: Vec<Setting> = db.query(&select).unwrap().to_models().unwrap();
    assert_eq!(read, [setting]);

    drop(db);
    std::fs::remove_file(&path).unwrap();
}
