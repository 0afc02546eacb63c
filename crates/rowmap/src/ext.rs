//! Method-call entry points that build a default [`Mapper`] per call.

use crate::{Mapper, Model};
use rowmap_core::{
    driver::{Connection, Record, RowSource},
    Result,
};

/// Materializes models from a single record.
pub trait RecordExt: Record {
    /// See [`Mapper::materialize`].
    fn to_model<T: Model>(&self) -> Result<T> {
        Mapper::<T>::new().materialize(self)
    }
}

impl<R: Record + ?Sized> RecordExt for R {}

/// Materializes models from a row source.
pub trait RowSourceExt: RowSource {
    /// See [`Mapper::materialize_all`].
    fn to_models<T: Model>(&mut self) -> Result<Vec<T>> {
        Mapper::<T>::new().materialize_all(self)
    }

    /// See [`Mapper::materialize_next`].
    fn next_model<T: Model>(&mut self) -> Result<Option<T>> {
        Mapper::<T>::new().materialize_next(self)
    }
}

impl<S: RowSource + ?Sized> RowSourceExt for S {}

/// Builds commands from models.
pub trait ConnectionExt: Connection {
    /// See [`Mapper::build_command`].
    fn create_command_for<'a, T: Model + 'a>(
        &'a self,
        sql: &'a str,
        model: &'a T,
        transaction: Option<&'a Self::Transaction>,
    ) -> Result<Self::Command> {
        Mapper::<T>::new().build_command(self, sql, model, transaction)
    }
}

impl<C: Connection + ?Sized> ConnectionExt for C {}
