use parley_base::validator::len;
use parley_core::{
    error::DefinitionError,
    intent::{IntentConstructor, Param},
    model::{FieldDescriptor, InteractionKind, InteractionKinds},
    shape::{EntityBuilder, EntitySchema},
    value::ValueKind,
};
use std::sync::LazyLock;

///
/// MESSAGE
///
/// id          : Get
/// sender_id   : Create | Get
/// receiver_id : Create | Get
/// text        : Create | Edit | Get, 1..=256 characters
/// status      : Edit | Get, default 0
///

pub static MESSAGE: LazyLock<EntitySchema> =
    LazyLock::new(|| define().expect("Message entity declaration is valid"));

/// `init_create(sender_id, receiver_id, text)`
pub static INIT_CREATE: LazyLock<IntentConstructor> = LazyLock::new(|| {
    MESSAGE
        .intent(
            InteractionKind::Create,
            "init_create",
            [
                Param::required("sender_id"),
                Param::required("receiver_id"),
                Param::required("text"),
            ],
        )
        .expect("Message.init_create declaration is valid")
});

pub const TEXT_MAX_LEN: usize = 256;

fn define() -> Result<EntitySchema, DefinitionError> {
    let created = InteractionKinds::CREATE | InteractionKinds::GET;
    let edited = InteractionKinds::EDIT | InteractionKinds::GET;

    EntityBuilder::new("Message")
        .field(FieldDescriptor::new("id", ValueKind::Int, InteractionKinds::GET)?)
        .field(FieldDescriptor::new("sender_id", ValueKind::Int, created)?)
        .field(FieldDescriptor::new("receiver_id", ValueKind::Int, created)?)
        .field(FieldDescriptor::new("text", ValueKind::Text, InteractionKinds::ALL)?)
        .field(FieldDescriptor::new("status", ValueKind::Int, edited)?.with_default(0)?)
        .validator("text", "len", len::Range::new(1, TEXT_MAX_LEN))
        .build()
}

///
/// TESTS
///
