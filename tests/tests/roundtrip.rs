use pretty_assertions::assert_eq;
use rowmap::{stmt::Value, ConnectionExt, Enum, Mapper, Model, RowSourceExt};
use tests::{tests, DbTest};

#[derive(Debug, Default, Clone, Copy, PartialEq, Enum)]
enum Tier {
    #[default]
    Free,
    Pro,
    Enterprise = 20,
}

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct Member {
    #[column("Id")]
    id: i64,

    #[column("Name")]
    name: String,

    #[column("Email")]
    email: Option<String>,

    #[column("Active")]
    active: bool,

    #[column("Score")]
    score: f64,

    #[column("Level")]
    level: u8,

    #[column("Grade")]
    grade: char,

    #[column("Token")]
    token: uuid::Uuid,

    #[column("Tier")]
    tier: Tier,
}

const SCHEMA: &str = "
    CREATE TABLE members (
        Id INTEGER PRIMARY KEY,
        Name TEXT NOT NULL,
        Email TEXT,
        Active INTEGER NOT NULL,
        Score REAL NOT NULL,
        Level INTEGER NOT NULL,
        Grade TEXT NOT NULL,
        Token TEXT NOT NULL,
        Tier INTEGER NOT NULL
    );
";

const INSERT: &str = "
    INSERT INTO members (Id, Name, Email, Active, Score, Level, Grade, Token, Tier)
    VALUES (@Id, @Name, @Email, @Active, @Score, @Level, @Grade, @Token, @Tier)
";

fn member(id: i64) -> Member {
    Member {
        id,
        name: format!("member-{id}"),
        email: Some(format!("member{id}@example.com")),
        active: id % 2 == 0,
        score: id as f64 + 0.25,
        level: 3,
        grade: 'B',
        token: uuid::Uuid::new_v4(),
        tier: Tier::Enterprise,
    }
}

fn insert_then_select(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    let member = member(1);

    let insert = db.create_command_for(INSERT, &member, None).unwrap();
    assert_eq!(db.execute(&insert).unwrap(), 1);

    // Only @Id is referenced; the other parameters are ignored
    let select = db
        .create_command_for("SELECT * FROM members WHERE Id = @Id", &member, None)
        .unwrap();
    let mut rows = db.query(&select).unwrap();

    let read: Vec<Member> = rows.to_models().unwrap();
    assert_eq!(read, [member]);
}

fn absent_values_round_trip_as_null(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    let member = Member {
        email: None,
        ..member(2)
    };

    let insert = db.create_command_for(INSERT, &member, None).unwrap();
    db.execute(&insert).unwrap();

    assert_eq!(
        test.raw_value(&db, "SELECT Email FROM members WHERE Id = 2"),
        Value::Null
    );

    let mut rows = db
        .query(&db.create_command_for("SELECT * FROM members", &member, None).unwrap())
        .unwrap();
    let read: Member = rows.next_model().unwrap().unwrap();
    assert_eq!(read.email, None);
    assert_eq!(read, member);
}

fn storage_representation(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    let member = member(4);

    db.execute(&db.create_command_for(INSERT, &member, None).unwrap())
        .unwrap();

    assert_eq!(
        test.raw_value(&db, "SELECT Active FROM members"),
        Value::I64(1)
    );
    assert_eq!(
        test.raw_value(&db, "SELECT Token FROM members"),
        Value::String(member.token.to_string())
    );
    assert_eq!(
        test.raw_value(&db, "SELECT Tier FROM members"),
        Value::I64(20)
    );
    assert_eq!(
        test.raw_value(&db, "SELECT Grade FROM members"),
        Value::from("B")
    );
}

fn materialize_all_keeps_row_order(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    let members: Vec<_> = (1..=5).map(member).collect();

    let mapper = Mapper::<Member>::new();
    for member in members.iter().rev() {
        let insert = mapper.build_command(&db, INSERT, member, None).unwrap();
        db.execute(&insert).unwrap();
    }

    let select = mapper
        .build_command(&db, "SELECT * FROM members ORDER BY Id", &members[0], None)
        .unwrap();
    let mut rows = db.query(&select).unwrap();
    assert_eq!(rows.remaining(), 5);

    let read = mapper.materialize_all(&mut rows).unwrap();
    assert_eq!(read, members);
}

fn partial_select_keeps_defaults(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    let member = member(6);

    db.execute(&db.create_command_for(INSERT, &member, None).unwrap())
        .unwrap();

    let select = db
        .create_command_for("SELECT id AS ID, name AS NAME FROM members", &member, None)
        .unwrap();
    let read: Member = db.query(&select).unwrap().next_model().unwrap().unwrap();

    assert_eq!(
        read,
        Member {
            id: 6,
            name: "member-6".to_string(),
            ..Member::default()
        }
    );
}

fn duplicate_columns_from_query(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    let member = member(7);

    db.execute(&db.create_command_for(INSERT, &member, None).unwrap())
        .unwrap();

    let select = db
        .create_command_for("SELECT Id, Id AS id FROM members", &member, None)
        .unwrap();
    let err = db
        .query(&select)
        .unwrap()
        .to_models::<Member>()
        .unwrap_err();

    assert!(err.is_duplicate_column());
    assert_eq!(
        err.to_string(),
        "duplicate column: ID appears at ordinals 0 and 1"
    );
}

tests!(
    insert_then_select,
    absent_values_round_trip_as_null,
    storage_representation,
    materialize_all_keeps_row_order,
    partial_select_keeps_defaults,
    duplicate_columns_from_query,
);
