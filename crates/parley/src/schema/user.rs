use crate::schema::MESSAGE;
use parley_base::validator::{num, record, text};
use parley_core::{
    error::DefinitionError,
    intent::{IntentConstructor, Param},
    model::{FieldDescriptor, InteractionKind, InteractionKinds},
    shape::{EntityBuilder, EntitySchema},
    value::{Value, ValueKind},
};
use std::sync::{Arc, LazyLock};

///
/// USER
///
/// id                : Get
/// nik_name          : Create | Edit | Get, `@` + 2..=31 word characters
/// fst_name/sec_name : Create | Edit | Get, optional, 2..=16 characters
/// status            : Edit | Get, default 0, one of {0, 1}
/// received_messages : Get, Message.Get records, default []
/// sent_messages     : Get, Message.Get records, default []
///
/// Message lists are projected item by item onto Message.Get, so an
/// embedded record never carries a field Message.Get does not declare.
///

pub static USER: LazyLock<EntitySchema> =
    LazyLock::new(|| define().expect("User entity declaration is valid"));

/// `init_create(nik_name, fst_name = null, sec_name = null, **extra)`
pub static INIT_CREATE: LazyLock<IntentConstructor> = LazyLock::new(|| {
    USER.intent(
        InteractionKind::Create,
        "init_create",
        [
            Param::required("nik_name"),
            Param::optional("fst_name", Value::Null),
            Param::optional("sec_name", Value::Null),
        ],
    )
    .map(IntentConstructor::accept_extra)
    .expect("User.init_create declaration is valid")
});

/// `init_edit(nik_name, status, fst_name = null, sec_name = null)`
pub static INIT_EDIT: LazyLock<IntentConstructor> = LazyLock::new(|| {
    USER.intent(
        InteractionKind::Edit,
        "init_edit",
        [
            Param::required("nik_name"),
            Param::required("status"),
            Param::optional("fst_name", Value::Null),
            Param::optional("sec_name", Value::Null),
        ],
    )
    .expect("User.init_edit declaration is valid")
});

fn define() -> Result<EntitySchema, DefinitionError> {
    let writable = InteractionKinds::ALL;
    let messages = ValueKind::list(ValueKind::Record);

    EntityBuilder::new("User")
        .field(FieldDescriptor::new("id", ValueKind::Int, InteractionKinds::GET)?)
        .field(FieldDescriptor::new("nik_name", ValueKind::Text, writable)?)
        .field(FieldDescriptor::optional("fst_name", ValueKind::Text, writable)?)
        .field(FieldDescriptor::optional("sec_name", ValueKind::Text, writable)?)
        .field(
            FieldDescriptor::new(
                "status",
                ValueKind::Int,
                InteractionKinds::EDIT | InteractionKinds::GET,
            )?
            .with_default(0)?,
        )
        .field(
            FieldDescriptor::new("received_messages", messages.clone(), InteractionKinds::GET)?
                .with_default(Value::List(Vec::new()))?,
        )
        .field(
            FieldDescriptor::new("sent_messages", messages, InteractionKinds::GET)?
                .with_default(Value::List(Vec::new()))?,
        )
        .validator("nik_name", "nik_name", text::NikName)
        .validator("fst_name", "name_len", text::NameLen)
        .validator("sec_name", "name_len", text::NameLen)
        .validator("status", "status", num::InSet::new([0, 1]))
        .validator("received_messages", "messages", messages_rule())
        .validator("sent_messages", "messages", messages_rule())
        .build()
}

fn messages_rule() -> record::ListOf {
    record::ListOf::new(Arc::clone(MESSAGE.get()))
}

///
/// TESTS
///
