use crate::{
    Error,
    db::{Db, StoreError, columns, expect_shape, int_column},
    schema::USER,
};
use parley_core::{
    model::InteractionKind,
    shape::{Arguments, Shape},
    value::{Record, Value},
};

const USER_COLUMNS: [&str; 5] = ["id", "nik_name", "fst_name", "sec_name", "status"];

impl Db {
    ///
    /// READ
    ///

    #[must_use]
    pub fn find_user(&self, id: i64) -> Option<&Record> {
        self.users.get(&id)
    }

    pub fn get_user(&self, id: i64) -> Result<&Record, Error> {
        Ok(self
            .find_user(id)
            .ok_or_else(|| StoreError::not_found("User", id))?)
    }

    #[must_use]
    pub fn find_user_by_nik_name(&self, nik_name: &str) -> Option<&Record> {
        self.users
            .values()
            .find(|row| row.get("nik_name").and_then(Value::as_text) == Some(nik_name))
    }

    pub fn get_user_by_nik_name(&self, nik_name: &str) -> Result<&Record, Error> {
        Ok(self
            .find_user_by_nik_name(nik_name)
            .ok_or_else(|| StoreError::not_found("User", nik_name))?)
    }

    /// Users in id order; `limit` defaults to and is clamped by the
    /// configured page sizes.
    #[must_use]
    pub fn get_users(&self, skip: usize, limit: Option<u32>) -> Vec<&Record> {
        let limit = usize::try_from(self.config.clamp_limit(limit)).unwrap_or(usize::MAX);

        self.users.values().skip(skip).take(limit).collect()
    }

    #[must_use]
    pub fn get_users_count(&self) -> usize {
        self.users.len()
    }

    /// The user's Get shape, with every received and sent message embedded
    /// as a Message.Get record.
    pub fn user_view(&self, id: i64) -> Result<Shape, Error> {
        let mut source = self.get_user(id)?.clone();
        source.insert("received_messages", self.message_records("receiver_id", id)?);
        source.insert("sent_messages", self.message_records("sender_id", id)?);

        Ok(USER.get().project(&source)?)
    }

    ///
    /// WRITE
    ///

    /// Store a new user; the nickname must be free.
    pub fn post_user(&mut self, data: &Shape) -> Result<Record, Error> {
        expect_shape(data, &USER, InteractionKind::Create)?;
        let nik_name = data.text("nik_name").unwrap_or_default();
        if self.find_user_by_nik_name(nik_name).is_some() {
            return Err(nickname_taken(nik_name).into());
        }

        let id = self.next_user_id;
        let mut source = data.to_record();
        source.insert("id", id);
        let view = USER.get().project(&source)?;
        let row = columns(&view, &USER_COLUMNS);

        self.next_user_id += 1;
        self.users.insert(id, row.clone());
        self.debug_log(format!("post_user id={id} nik_name={nik_name}"));

        Ok(row)
    }

    /// Overwrite every column the Edit shape carries.
    pub fn put_user(&mut self, id: i64, data: &Shape) -> Result<Record, Error> {
        expect_shape(data, &USER, InteractionKind::Edit)?;
        self.get_user(id)?;

        let nik_name = data.text("nik_name").unwrap_or_default();
        if let Some(other) = self.find_user_by_nik_name(nik_name)
            && other.get("id") != Some(&Value::Int(id))
        {
            return Err(nickname_taken(nik_name).into());
        }

        let row = self
            .users
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("User", id))?;
        for (name, value) in data.iter() {
            if row.contains(name) {
                row.insert(name, value.clone());
            }
        }
        let row = row.clone();
        self.debug_log(format!("put_user id={id}"));

        Ok(row)
    }

    /// Apply a partial edit: fields not named in `changes` keep their
    /// stored value, then the whole Edit shape is validated.
    pub fn edit_user(&mut self, id: i64, changes: Record) -> Result<Record, Error> {
        let row = self.get_user(id)?;
        let edit = USER.edit();

        let mut keyword = changes;
        for name in edit.field_names() {
            if !keyword.contains(name)
                && let Some(value) = row.get(name)
            {
                keyword.insert(name, value.clone());
            }
        }

        let data = edit.construct(Arguments::keyword(keyword))?;

        self.put_user(id, &data)
    }

    /// Remove a user together with every message they sent or received.
    pub fn del_user(&mut self, id: i64) -> Result<Record, Error> {
        let row = self
            .users
            .remove(&id)
            .ok_or_else(|| StoreError::not_found("User", id))?;

        let before = self.messages.len();
        self.messages.retain(|_, message| {
            int_column(message, "sender_id") != Some(id)
                && int_column(message, "receiver_id") != Some(id)
        });
        self.debug_log(format!(
            "del_user id={id} messages_removed={}",
            before - self.messages.len()
        ));

        Ok(row)
    }
}

fn nickname_taken(nik_name: &str) -> StoreError {
    StoreError::Conflict {
        entity: "User",
        reason: format!("nickname '{nik_name}' is already taken"),
    }
}
