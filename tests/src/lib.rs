#[macro_use]
mod macros;

mod db_test;
pub use db_test::DbTest;
