use pretty_assertions::assert_eq;
use rowmap::{stmt::Value, ConnectionExt, Model, RowSourceExt};
use rust_decimal::Decimal;
use tests::{tests, DbTest};

#[derive(Debug, Default, PartialEq, Model)]
struct Price {
    id: i64,
    amount: Decimal,
    discount: Option<Decimal>,
}

const SCHEMA: &str = "
    CREATE TABLE prices (id INTEGER PRIMARY KEY, amount TEXT NOT NULL, discount TEXT);
";

const INSERT: &str = "INSERT INTO prices (id, amount, discount) VALUES (@id, @amount, @discount)";

fn decimals_round_trip(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    let prices = vec![
        Price {
            id: 1,
            amount: Decimal::new(1999, 2),
            discount: None,
        },
        Price {
            id: 2,
            amount: Decimal::new(-5, 0),
            discount: Some(Decimal::new(125, 3)),
        },
    ];

    for price in &prices {
        db.execute(&db.create_command_for(INSERT, price, None).unwrap())
            .unwrap();
    }

    assert_eq!(
        test.raw_value(&db, "SELECT amount FROM prices WHERE id = 1"),
        Value::from("19.99")
    );

    let select = db
        .create_command_for("SELECT * FROM prices ORDER BY id", &prices[0], None)
        .unwrap();
    let read: Vec<Price> = db.query(&select).unwrap().to_models().unwrap();

    assert_eq!(read, prices);
}

fn numeric_columns_coerce_to_decimal(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    db.execute_batch("INSERT INTO prices (id, amount, discount) VALUES (1, 7, 0.5)")
        .unwrap();

    let select = db
        .create_command_for("SELECT * FROM prices", &Price::default(), None)
        .unwrap();
    let read: Price = db.query(&select).unwrap().next_model().unwrap().unwrap();

    assert_eq!(read.amount, Decimal::new(7, 0));
    assert_eq!(read.discount, Some(Decimal::new(5, 1)));
}

tests!(decimals_round_trip, numeric_columns_coerce_to_decimal,);
