use parley::{
    core::args,
    error::{ConstructionErrorKind, ErrorKind},
    prelude::*,
    schema::user,
};
use proptest::prelude::*;

fn validation_issues(err: Error) -> Vec<FieldIssues> {
    match err.kind {
        ErrorKind::Validation(issues) => issues,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn nickname_length_is_checked_after_stripping_the_at_sign() {
    let err: Error = USER
        .create()
        .construct(args!(nik_name = "@a"))
        .unwrap_err()
        .into();

    let issues = validation_issues(err);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "nik_name");
    assert!(issues[0].reasons[0].contains("too short"));

    let ok = USER.create().construct(args!(nik_name = "@ab")).unwrap();
    assert_eq!(ok.text("nik_name"), Some("@ab"));
}

#[test]
fn nickname_reports_both_violations() {
    let err: Error = USER
        .create()
        .construct(args!(nik_name = "@!"))
        .unwrap_err()
        .into();

    let issues = validation_issues(err);
    let reasons = &issues[0].reasons;
    assert_eq!(reasons.len(), 2);
    assert!(reasons[0].contains("too short"));
    assert!(reasons[1].contains("wrong format"));
}

#[test]
fn status_is_zero_or_one_and_defaults_to_zero() {
    let edit = USER.edit();

    let err: Error = edit
        .construct(args!(nik_name = "@ann", status = 2))
        .unwrap_err()
        .into();
    assert_eq!(err.status_code(), 422);

    let one = edit.construct(args!(nik_name = "@ann", status = 1)).unwrap();
    assert_eq!(one.int("status"), Some(1));

    let default = edit.construct(args!(nik_name = "@ann")).unwrap();
    assert_eq!(default.int("status"), Some(0));
}

#[test]
fn get_projects_into_edit_and_not_into_message_create() {
    let get = USER
        .get()
        .project(
            &Record::new()
                .with("id", 1)
                .with("nik_name", "@ann")
                .with("status", 1),
        )
        .unwrap();

    let edit = USER.edit().project(&get).unwrap();
    assert_eq!(edit.get("id"), None);
    assert_eq!(edit.text("nik_name"), Some("@ann"));
    assert_eq!(edit.int("status"), Some(1));

    let err: Error = MESSAGE.create().project(&get).unwrap_err().into();
    assert_eq!(
        err.kind,
        ErrorKind::Construction(ConstructionErrorKind::MissingField)
    );
    assert_eq!(
        err.message,
        "Message.Create: missing required field(s): sender_id, receiver_id, text"
    );
}

#[test]
fn shape_without_fields_serializes_to_an_empty_mapping() {
    let schema = EntityBuilder::new("Audit")
        .field(FieldDescriptor::new("id", ValueKind::Int, InteractionKinds::GET).unwrap())
        .build()
        .unwrap();

    let edit = schema.edit().construct(args!()).unwrap();

    assert_eq!(serde_json::to_value(&edit).unwrap(), serde_json::json!({}));
}

#[test]
fn password_like_fields_never_reach_the_get_shape() {
    let schema = EntityBuilder::new("Account")
        .field(FieldDescriptor::new("login", ValueKind::Text, InteractionKinds::ALL).unwrap())
        .field(FieldDescriptor::new("password", ValueKind::Text, InteractionKinds::CREATE).unwrap())
        .build()
        .unwrap();

    let create = schema
        .create()
        .construct(args!(login = "ann", password = "secret"))
        .unwrap();
    let get = schema.get().project(&create).unwrap();

    assert_eq!(
        serde_json::to_string(&get).unwrap(),
        r#"{"login":"ann"}"#
    );
}

#[test]
fn request_body_flows_through_the_store() {
    let config = Config::from_toml_str("[store]\nmax_limit = 10\ndefault_limit = 5\n").unwrap();
    let mut db = Db::new(&config.store);

    let body: Arguments =
        serde_json::from_str(r#"{"keyword":{"nik_name":"ann","fst_name":"Anna"}}"#).unwrap();
    let data = user::INIT_CREATE.call(body).unwrap();
    let row = db.post_user(&data).unwrap();
    let id = row.get("id").and_then(Value::as_int).unwrap();

    let view = db.user_view(id).unwrap();
    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        serde_json::json!({
            "id": 1,
            "nik_name": "@ann",
            "fst_name": "Anna",
            "sec_name": null,
            "status": 0,
            "received_messages": [],
            "sent_messages": [],
        })
    );
}

#[test]
fn errors_serialize_for_the_route_layer() {
    let err: Error = USER
        .edit()
        .construct(args!(nik_name = "@a", fst_name = "B", status = 5))
        .unwrap_err()
        .into();

    let json = serde_json::to_value(&err).unwrap();
    let issues = &json["kind"]["Validation"];

    assert_eq!(issues.as_array().unwrap().len(), 3);
    assert_eq!(issues[2]["field"], "status");
}

proptest! {
    #[test]
    fn valid_users_revalidate_to_themselves(
        nik in "[_a-zA-Z0-9]{2,31}",
        fst in proptest::option::of("[a-zA-Z]{2,16}"),
        status in 0i64..=1,
    ) {
        let edit = USER
            .edit()
            .construct(args!(nik_name = nik.as_str(), fst_name = fst.clone(), status = status))
            .unwrap();

        prop_assert_eq!(edit.revalidate().unwrap(), edit.clone());
        prop_assert_eq!(edit.text("nik_name").map(str::len), Some(nik.len() + 1));
    }

    #[test]
    fn omitting_the_nickname_is_always_missing(status in 0i64..=1) {
        let err: Error = USER
            .edit()
            .construct(args!(status = status))
            .unwrap_err()
            .into();

        prop_assert_eq!(
            err.kind,
            ErrorKind::Construction(ConstructionErrorKind::MissingField)
        );
    }
}
