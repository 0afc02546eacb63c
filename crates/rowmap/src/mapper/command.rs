use super::{Mapper, Options};
use crate::Model;

use rowmap_core::{
    driver::{Command, CommandKind, Connection, Parameter},
    stmt::Value,
    Error, Result,
};

impl<T: Model> Mapper<T> {
    /// Creates a command running `sql` with one parameter per readable field
    /// of `model`.
    ///
    /// Parameters are named after the field's column with the configured
    /// prefix, `@Name` by default. Absent field values are bound as
    /// [`Value::Null`]. The command is returned unexecuted.
    pub fn build_command<'a, C>(
        &self,
        connection: impl Into<Option<&'a C>>,
        sql: impl Into<Option<&'a str>>,
        model: impl Into<Option<&'a T>>,
        transaction: impl Into<Option<&'a C::Transaction>>,
    ) -> Result<C::Command>
    where
        C: Connection + ?Sized + 'a,
        T: 'a,
    {
        self.build_command_with_kind(
            connection,
            sql,
            model,
            transaction,
            self.options.command_kind,
        )
    }

    /// Same as [`Mapper::build_command`] with an explicit command kind.
    pub fn build_command_with_kind<'a, C>(
        &self,
        connection: impl Into<Option<&'a C>>,
        sql: impl Into<Option<&'a str>>,
        model: impl Into<Option<&'a T>>,
        transaction: impl Into<Option<&'a C::Transaction>>,
        kind: CommandKind,
    ) -> Result<C::Command>
    where
        C: Connection + ?Sized + 'a,
        T: 'a,
    {
        let (connection, sql) = required(connection.into(), sql.into())?;

        let Some(model) = model.into() else {
            return Err(Error::null_input("model"));
        };

        let mut command = prepare(connection, sql, kind, transaction.into())?;

        for (index, field) in self.descriptor().readable() {
            let name = self.options.parameter_name(field.column);
            push_parameter(&mut command, &name, model.store_field(index)?)?;
        }

        tracing::trace!(
            model = self.descriptor().name,
            sql,
            ?kind,
            parameters = command.parameters().len(),
            "built command"
        );

        Ok(command)
    }
}

impl<T> Mapper<T> {
    /// Creates a command running `sql` with one parameter per name/value pair.
    ///
    /// Every key is validated before the command is created: an empty or
    /// whitespace-only key fails with an invalid key error. Keys are prefixed
    /// unless they already carry the prefix.
    pub fn build_command_from_pairs<'a, C, I, K, V>(
        &self,
        connection: impl Into<Option<&'a C>>,
        pairs: I,
        sql: impl Into<Option<&'a str>>,
        transaction: impl Into<Option<&'a C::Transaction>>,
    ) -> Result<C::Command>
    where
        C: Connection + ?Sized + 'a,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        from_pairs(
            &self.options,
            connection.into(),
            pairs,
            sql.into(),
            transaction.into(),
        )
    }
}

/// Creates a text command running `sql` with one `@`-prefixed parameter per
/// name/value pair.
///
/// See [`Mapper::build_command_from_pairs`].
pub fn build_command<'a, C, I, K, V>(
    connection: impl Into<Option<&'a C>>,
    pairs: I,
    sql: impl Into<Option<&'a str>>,
    transaction: impl Into<Option<&'a C::Transaction>>,
) -> Result<C::Command>
where
    C: Connection + ?Sized + 'a,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    from_pairs(
        &Options::default(),
        connection.into(),
        pairs,
        sql.into(),
        transaction.into(),
    )
}

fn from_pairs<C, I, K, V>(
    options: &Options,
    connection: Option<&C>,
    pairs: I,
    sql: Option<&str>,
    transaction: Option<&C::Transaction>,
) -> Result<C::Command>
where
    C: Connection + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    let (connection, sql) = required(connection, sql)?;

    let mut parameters = vec![];

    for (key, value) in pairs {
        let key = key.as_ref();

        if key.trim().is_empty() {
            return Err(Error::invalid_key(key));
        }

        parameters.push((options.parameter_name(key), value.into()));
    }

    let mut command = prepare(connection, sql, options.command_kind, transaction)?;

    for (name, value) in parameters {
        push_parameter(&mut command, &name, value)?;
    }

    tracing::trace!(
        sql,
        kind = ?options.command_kind,
        parameters = command.parameters().len(),
        "built command"
    );

    Ok(command)
}

fn required<'a, C>(connection: Option<&'a C>, sql: Option<&'a str>) -> Result<(&'a C, &'a str)>
where
    C: ?Sized,
{
    let Some(connection) = connection else {
        return Err(Error::null_input("connection"));
    };

    match sql {
        Some(sql) if !sql.is_empty() => Ok((connection, sql)),
        _ => Err(Error::null_input("sql")),
    }
}

fn prepare<C>(
    connection: &C,
    sql: &str,
    kind: CommandKind,
    transaction: Option<&C::Transaction>,
) -> Result<C::Command>
where
    C: Connection + ?Sized,
{
    let mut command = connection.create_command()?;
    command.set_text(sql);
    command.set_kind(kind);

    if let Some(transaction) = transaction {
        command.set_transaction(transaction);
    }

    Ok(command)
}

fn push_parameter<C: Command>(command: &mut C, name: &str, value: Value) -> Result<()> {
    let mut parameter = command.create_parameter()?;
    parameter.set_name(name);
    parameter.set_value(value);
    command.add_parameter(parameter);
    Ok(())
}
