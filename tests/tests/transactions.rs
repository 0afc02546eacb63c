use pretty_assertions::assert_eq;
use rowmap::{stmt::Value, Command, ConnectionExt, Model};
use tests::{tests, DbTest};

#[derive(Debug, Default, Model)]
struct Entry {
    id: i64,
    note: String,
}

const SCHEMA: &str = "CREATE TABLE entries (id INTEGER PRIMARY KEY, note TEXT NOT NULL);";
const INSERT: &str = "INSERT INTO entries (id, note) VALUES (@id, @note)";
const COUNT: &str = "SELECT COUNT(*) FROM entries";

fn entry(id: i64) -> Entry {
    Entry {
        id,
        note: format!("entry {id}"),
    }
}

fn committed_writes_are_visible(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);

    let tx = db.begin().unwrap();
    for id in 1..=3 {
        let insert = db.create_command_for(INSERT, &entry(id), Some(&tx)).unwrap();
        assert_eq!(insert.transaction(), Some(&tx));
        db.execute(&insert).unwrap();
    }
    db.commit(&tx).unwrap();

    assert_eq!(test.raw_value(&db, COUNT), Value::I64(3));
}

fn rolled_back_writes_are_discarded(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);

    db.execute(&db.create_command_for(INSERT, &entry(1), None).unwrap())
        .unwrap();

    let tx = db.begin().unwrap();
    db.execute(&db.create_command_for(INSERT, &entry(2), Some(&tx)).unwrap())
        .unwrap();
    db.rollback(&tx).unwrap();

    assert_eq!(test.raw_value(&db, COUNT), Value::I64(1));
}

fn stale_transaction_is_rejected(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);

    let tx = db.begin().unwrap();
    let insert = db.create_command_for(INSERT, &entry(1), Some(&tx)).unwrap();
    db.commit(&tx).unwrap();

    let err = db.execute(&insert).unwrap_err();
    assert_eq!(
        err.to_string(),
        "transaction 0 is not active on this connection"
    );
    assert_eq!(test.raw_value(&db, COUNT), Value::I64(0));
}

fn nested_begin_is_unsupported(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);

    let tx = db.begin().unwrap();
    let err = db.begin().unwrap_err();
    assert!(err.is_unsupported_feature());

    // The open transaction is unaffected
    db.execute(&db.create_command_for(INSERT, &entry(1), Some(&tx)).unwrap())
        .unwrap();
    db.commit(&tx).unwrap();

    assert_eq!(test.raw_value(&db, COUNT), Value::I64(1));
}

#[derive(Debug, Default, Model)]
struct Child {
    id: i64,
    parent_id: i64,
}

const DEFERRED_SCHEMA: &str = "
    PRAGMA foreign_keys = ON;
    CREATE TABLE parents (id INTEGER PRIMARY KEY);
    CREATE TABLE children (
        id INTEGER PRIMARY KEY,
        parent_id INTEGER NOT NULL REFERENCES parents(id) DEFERRABLE INITIALLY DEFERRED
    );
";

fn failed_commit_can_be_rolled_back(test: &mut DbTest) {
    let db = test.setup_db(DEFERRED_SCHEMA);
    let orphan = Child { id: 1, parent_id: 7 };

    let tx = db.begin().unwrap();
    let insert = db
        .create_command_for(
            "INSERT INTO children (id, parent_id) VALUES (@id, @parent_id)",
            &orphan,
            Some(&tx),
        )
        .unwrap();
    db.execute(&insert).unwrap();

    // The deferred foreign key is checked on COMMIT, which leaves the
    // transaction open
    let err = db.commit(&tx).unwrap_err();
    assert!(err.is_driver_operation_failed());

    db.rollback(&tx).unwrap();
    assert_eq!(
        test.raw_value(&db, "SELECT COUNT(*) FROM children"),
        Value::I64(0)
    );

    // The connection is usable again
    let tx = db.begin().unwrap();
    db.execute_batch("INSERT INTO parents (id) VALUES (7)").unwrap();
    let insert = db
        .create_command_for(
            "INSERT INTO children (id, parent_id) VALUES (@id, @parent_id)",
            &orphan,
            Some(&tx),
        )
        .unwrap();
    db.execute(&insert).unwrap();
    db.commit(&tx).unwrap();

    assert_eq!(
        test.raw_value(&db, "SELECT COUNT(*) FROM children"),
        Value::I64(1)
    );
}

tests!(
    committed_writes_are_visible,
    rolled_back_writes_are_discarded,
    stale_transaction_is_rejected,
    nested_begin_is_unsupported,
    failed_commit_can_be_rolled_back,
);
