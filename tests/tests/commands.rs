use pretty_assertions::assert_eq;
use rowmap::{
    mapper, sqlite::Sqlite, stmt::Value, CommandKind, ConnectionExt, Mapper, Model, RowSourceExt,
};
use tests::{tests, DbTest};

#[derive(Debug, Default, PartialEq, Model)]
struct Book {
    id: i64,
    title: String,
    pages: Option<u32>,
}

const SCHEMA: &str = "CREATE TABLE books (id INTEGER PRIMARY KEY, title TEXT NOT NULL, pages INTEGER);";

fn books(db: &Sqlite) -> Vec<Book> {
    let select = db
        .create_command_for("SELECT * FROM books ORDER BY id", &Book::default(), None)
        .unwrap();

    db.query(&select).unwrap().to_models().unwrap()
}

fn insert_from_pairs(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);

    let insert = mapper::build_command(
        &db,
        [
            ("id", Value::I64(1)),
            ("@title", Value::from("Dune")),
            ("pages", Value::Null),
            ("unused", Value::Bool(true)),
        ],
        "INSERT INTO books (id, title, pages) VALUES (@id, @title, @pages)",
        None,
    )
    .unwrap();
    assert_eq!(db.execute(&insert).unwrap(), 1);

    assert_eq!(
        books(&db),
        [Book {
            id: 1,
            title: "Dune".to_string(),
            pages: None,
        }]
    );
}

fn colon_prefixed_parameters(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    let mapper = Mapper::<Book>::builder()
        .parameter_prefix(':')
        .build::<Book>()
        .unwrap();

    let book = Book {
        id: 9,
        title: "Solaris".to_string(),
        pages: Some(204),
    };
    let insert = mapper
        .build_command(
            &db,
            "INSERT INTO books (id, title, pages) VALUES (:id, :title, :pages)",
            &book,
            None,
        )
        .unwrap();
    db.execute(&insert).unwrap();

    assert_eq!(books(&db), [book]);
}

fn invalid_pair_key_creates_nothing(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);

    let err = mapper::build_command(
        &db,
        [("id", Value::I64(1)), (" ", Value::from("x"))],
        "INSERT INTO books (id, title) VALUES (@id, 'x')",
        None,
    )
    .unwrap_err();

    assert!(err.is_invalid_key());
    assert!(books(&db).is_empty());
}

fn stored_procedures_are_unsupported(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);

    let command = Mapper::<Book>::new()
        .build_command_with_kind(
            &db,
            "insert_book",
            &Book::default(),
            None,
            CommandKind::StoredProcedure,
        )
        .unwrap();

    let err = db.execute(&command).unwrap_err();
    assert!(err.is_unsupported_feature());
    assert_eq!(
        err.to_string(),
        "unsupported feature: SQLite does not support stored procedures"
    );
}

fn malformed_sql_reports_driver_failure(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);

    let command = db
        .create_command_for("INSERT INTO nowhere VALUES (@id)", &Book::default(), None)
        .unwrap();

    let err = db.execute(&command).unwrap_err();
    assert!(err.is_driver_operation_failed());
    assert!(std::error::Error::source(&err).is_some());
}

tests!(
    insert_from_pairs,
    colon_prefixed_parameters,
    invalid_pair_key_creates_nothing,
    stored_procedures_are_unsupported,
    malformed_sql_reports_driver_failure,
);
