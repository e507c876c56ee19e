use crate::{
    Error,
    db::{Db, StoreError, columns, expect_shape, int_column},
    schema::MESSAGE,
};
use parley_core::{
    error::ShapeError,
    model::InteractionKind,
    shape::Shape,
    value::{Record, Value},
};

const MESSAGE_COLUMNS: [&str; 5] = ["id", "sender_id", "receiver_id", "text", "status"];

impl Db {
    ///
    /// READ
    ///

    #[must_use]
    pub fn find_message(&self, id: i64) -> Option<&Record> {
        self.messages.get(&id)
    }

    pub fn get_message(&self, id: i64) -> Result<&Record, Error> {
        Ok(self
            .find_message(id)
            .ok_or_else(|| StoreError::not_found("Message", id))?)
    }

    #[must_use]
    pub fn get_messages_count(&self) -> usize {
        self.messages.len()
    }

    pub fn message_view(&self, id: i64) -> Result<Shape, Error> {
        Ok(MESSAGE.get().project(self.get_message(id)?)?)
    }

    // Message.Get records of every message whose `column` is `user_id`,
    // in id order.
    pub(super) fn message_records(&self, column: &str, user_id: i64) -> Result<Value, ShapeError> {
        let records = self
            .messages
            .values()
            .filter(|row| int_column(row, column) == Some(user_id))
            .map(|row| MESSAGE.get().project(row).map(Value::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Value::List(records))
    }

    ///
    /// WRITE
    ///

    /// Store a new message; sender and receiver must both exist.
    pub fn post_message(&mut self, data: &Shape) -> Result<Record, Error> {
        expect_shape(data, &MESSAGE, InteractionKind::Create)?;
        let sender_id = self.participant(data, "sender_id")?;
        let receiver_id = self.participant(data, "receiver_id")?;

        let id = self.next_message_id;
        let mut source = data.to_record();
        source.insert("id", id);
        let view = MESSAGE.get().project(&source)?;
        let row = columns(&view, &MESSAGE_COLUMNS);

        self.next_message_id += 1;
        self.messages.insert(id, row.clone());
        self.debug_log(format!(
            "post_message id={id} sender_id={sender_id} receiver_id={receiver_id}"
        ));

        Ok(row)
    }

    /// Overwrite every column the Edit shape carries.
    pub fn put_message(&mut self, id: i64, data: &Shape) -> Result<Record, Error> {
        expect_shape(data, &MESSAGE, InteractionKind::Edit)?;

        let row = self
            .messages
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("Message", id))?;
        for (name, value) in data.iter() {
            if row.contains(name) {
                row.insert(name, value.clone());
            }
        }
        let row = row.clone();
        self.debug_log(format!("put_message id={id}"));

        Ok(row)
    }

    fn participant(&self, data: &Shape, column: &str) -> Result<i64, StoreError> {
        match data.int(column) {
            Some(id) if self.users.contains_key(&id) => Ok(id),
            Some(id) => Err(StoreError::not_found("User", id)),
            None => Err(StoreError::not_found("User", column)),
        }
    }
}
