use super::Mapper;
use crate::Model;

use indexmap::{map::Entry, IndexMap};
use rowmap_core::{
    driver::{Record, RowSource},
    Error, Result,
};

impl<T: Model> Mapper<T> {
    /// Builds a `T` from the record's current row.
    ///
    /// Columns are matched to fields by name, ignoring case. Fields without a
    /// matching column, and fields whose column is null, keep the value
    /// [`Model::construct`] gave them. Any other value is coerced to the
    /// field's storage type; a failed coercion fails the whole call.
    pub fn materialize<'a, R>(&self, record: impl Into<Option<&'a R>>) -> Result<T>
    where
        R: Record + ?Sized + 'a,
    {
        let Some(record) = record.into() else {
            return Err(Error::null_input("record"));
        };

        let model = T::construct()?;
        let columns = ColumnIndex::new(record)?;
        self.load(model, record, &columns)
    }

    /// Reads every remaining row of `source` into a `T`, in order.
    ///
    /// The source is left exhausted but otherwise untouched.
    pub fn materialize_all<'a, S>(&self, source: impl Into<Option<&'a mut S>>) -> Result<Vec<T>>
    where
        S: RowSource + ?Sized + 'a,
    {
        let Some(source) = source.into() else {
            return Err(Error::null_input("source"));
        };

        let mut models = vec![];
        let mut columns = None;

        while source.advance()? {
            let model = T::construct()?;

            // All rows of a source share the same columns
            let index = match columns.take() {
                Some(index) => index,
                None => ColumnIndex::new(&*source)?,
            };

            models.push(self.load(model, &*source, &index)?);
            columns = Some(index);
        }

        tracing::debug!(
            model = self.descriptor().name,
            rows = models.len(),
            "materialized rows"
        );

        Ok(models)
    }

    /// Advances `source` once and builds a `T` from the produced row. Returns
    /// `None` when the source is exhausted.
    pub fn materialize_next<'a, S>(&self, source: impl Into<Option<&'a mut S>>) -> Result<Option<T>>
    where
        S: RowSource + ?Sized + 'a,
    {
        let Some(source) = source.into() else {
            return Err(Error::null_input("source"));
        };

        if !source.advance()? {
            return Ok(None);
        }

        self.materialize(&*source).map(Some)
    }

    /// Assigns the record's values to a freshly constructed `model`.
    fn load<R>(&self, mut model: T, record: &R, columns: &ColumnIndex) -> Result<T>
    where
        R: Record + ?Sized,
    {
        for (index, field) in self.descriptor().writable() {
            let Some(ordinal) = columns.get(field.column) else {
                continue;
            };

            let value = record.value(ordinal)?;

            if value.is_null() {
                continue;
            }

            let Some(ty) = &field.storage_ty else {
                continue;
            };

            model.load_field(index, ty.cast(value)?)?;
        }

        Ok(model)
    }
}

/// Case-insensitive lookup from column name to ordinal.
#[derive(Debug)]
struct ColumnIndex {
    /// Upper-cased column name to ordinal
    ordinals: IndexMap<String, usize>,
}

impl ColumnIndex {
    fn new<R>(record: &R) -> Result<Self>
    where
        R: Record + ?Sized,
    {
        let mut ordinals = IndexMap::with_capacity(record.field_count());

        for ordinal in 0..record.field_count() {
            let name = record.name(ordinal)?.to_uppercase();

            match ordinals.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(Error::duplicate_column(
                        entry.key().clone(),
                        *entry.get(),
                        ordinal,
                    ));
                }
                Entry::Vacant(entry) => {
                    entry.insert(ordinal);
                }
            }
        }

        Ok(ColumnIndex { ordinals })
    }

    fn get(&self, column: &str) -> Option<usize> {
        self.ordinals.get(&column.to_uppercase()).copied()
    }
}
