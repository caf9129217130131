mod common;

use common::{Account, User, record, user_mapper};
use record_mapper::{
    DataItem, MapperError, RenameTable, mapping::name_map, record::Direction,
};
use serde_json::{Value, json};

#[test]
fn map_to_second_drops_records_without_mapped_attributes() {
    let mut mapper = user_mapper();
    mapper
        .set_arrays(json!([{"id": 1, "name": "Bob"}, {"foo": "x"}]))
        .unwrap();

    let users = mapper.map_to_second("User").unwrap();
    assert_eq!(users.len(), 1);
    let user = users[0].downcast_ref::<User>().expect("user entity");
    assert_eq!(
        user,
        &User {
            id: Some(1),
            name: Some("Bob".to_string())
        }
    );
}

#[test]
fn attributes_of_first_record_ignores_later_records() {
    let mut mapper = user_mapper();
    mapper.set_arrays(json!([{"id": 1, "extra": 9}, {"id": 2}])).unwrap();
    assert_eq!(
        Value::Object(mapper.attributes_of_first_record()),
        json!({"userId": 1})
    );
}

#[test]
fn round_trip_restores_mapped_attributes() {
    let mut mapper = user_mapper();
    mapper
        .set_arrays(json!([{"id": 7, "name": "Ada", "ignored": true}]))
        .unwrap();
    let users = mapper.map_to_second("User").unwrap();

    mapper.clear();
    mapper.set_array(&users);
    let accounts = mapper.map_to_first("Account").unwrap();

    assert_eq!(accounts.len(), 1);
    assert_eq!(
        Value::Object(accounts[0].attributes()),
        json!({"id": 7, "name": "Ada"})
    );
    assert_eq!(
        accounts[0].downcast_ref::<Account>().unwrap().name.as_deref(),
        Some("Ada")
    );
}

#[test]
fn mapped_attribute_without_setter_is_tolerated() {
    let mut mapper = record_mapper::EntityMapper::new(
        common::user_catalog(),
        name_map(&[("id", "userId"), ("email", "userEmail")]),
        Default::default(),
    );
    mapper
        .set_arrays(json!([{"id": 3, "email": "a@b.c"}, {"email": "only@b.c"}]))
        .unwrap();

    let users = mapper.map_to_second("User").unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(Value::Object(users[0].attributes()), json!({"userId": 3}));
}

#[test]
fn unknown_entity_name_fails_the_batch() {
    let mut mapper = user_mapper();
    mapper.set_arrays(json!({"id": 1})).unwrap();
    let err = mapper.map_to_second("Ghost").unwrap_err();
    assert!(matches!(err, MapperError::EntityNotFound { ref name } if name == "Ghost"));
}

#[test]
fn empty_data_never_consults_the_factory() {
    let mapper = user_mapper();
    assert!(mapper.map_to_second("Ghost").unwrap().is_empty());
}

#[test]
fn eager_accessors_use_default_entity_names() {
    let mut mapper = user_mapper();
    mapper.set_arrays(json!([{"id": 1}, {"userName": "Eve"}])).unwrap();

    let users = mapper.mapped_second_entities().unwrap();
    assert_eq!(users.len(), 1);

    let accounts = mapper.mapped_first_entities().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(Value::Object(accounts[0].attributes()), json!({"name": "Eve"}));
}

#[test]
fn rename_table_is_applied_per_direction() {
    let mut mapper = record_mapper::EntityMapper::new(
        common::user_catalog(),
        name_map(&[("profile", "userName")]),
        Default::default(),
    );
    mapper.set_renames(
        Direction::FirstToSecond,
        RenameTable::new().with_subtree("profile", RenameTable::new().with_leaf("n", "first")),
    );
    mapper
        .set_arrays(json!([{"profile": {"n": "Zoe"}}]))
        .unwrap();

    // The nested value is handed to the setter as-is; `User` only accepts strings.
    let users = mapper.map_to_second("User").unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].downcast_ref::<User>().unwrap().name.is_none());
    assert_eq!(mapper.data()[0], record(json!({"profile": {"n": "Zoe"}})));
}

#[test]
fn set_array_mixes_records_and_entities() {
    let mut mapper = user_mapper();
    let bob: Box<dyn record_mapper::Entity> = Box::new(User {
        id: Some(2),
        name: None,
    });
    mapper.set_array([
        DataItem::from(record(json!({"userId": 1}))),
        DataItem::from(&bob),
    ]);
    let accounts = mapper.map_to_first("Account").unwrap();
    let ids: Vec<_> = accounts
        .iter()
        .map(|a| a.downcast_ref::<Account>().unwrap().id)
        .collect();
    assert_eq!(ids, vec![Some(1), Some(2)]);
}

#[test]
fn lookups_return_empty_for_unmapped_names() {
    let mapper = user_mapper();
    assert_eq!(mapper.lookup_second_name("id"), "userId");
    assert_eq!(mapper.lookup_first_name("userName"), "name");
    assert_eq!(mapper.lookup_second_name("missing"), "");
    assert_eq!(mapper.lookup_first_name("missing"), "");
}

#[test]
fn invalid_json_payload_is_reported() {
    let mut mapper = user_mapper();
    assert!(matches!(
        mapper.set_arrays("[{"),
        Err(MapperError::Payload(_))
    ));
}

#[test]
fn list_without_leading_object_is_one_record() {
    let mut mapper = user_mapper();
    mapper.set_arrays("[7, 8]").unwrap();
    assert_eq!(mapper.data().len(), 1);
    assert_eq!(Value::Object(mapper.data()[0].clone()), json!({"0": 7, "1": 8}));
    assert!(mapper.map_to_second("User").unwrap().is_empty());
}
