use alloc::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Reflect;
use crate::info::{ReflectKind, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef, Struct};

#[derive(Reflect, Default, Debug, PartialEq)]
struct Audit {
    created_by: String,
    #[reflect(omit_empty)]
    revision: u32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Account {
    #[reflect(rename = "id")]
    account_id: u64,
    #[reflect(omit_empty = false)]
    tags: Vec<String>,
    #[reflect(skip)]
    session: NotReflected,
    #[reflect(embed)]
    audit: Audit,
    #[reflect(embed)]
    extra: Option<Audit>,
    labels: BTreeMap<String, i32>,
}

#[derive(Default, Debug, PartialEq)]
struct NotReflected;

#[derive(Reflect, Default)]
struct Page<T> {
    items: Vec<T>,
    total: Option<T>,
}

#[derive(Reflect, Default)]
struct Node {
    value: u8,
    next: Option<Box<Node>>,
}

#[derive(Reflect, Default)]
struct Marker;

#[derive(Reflect, Serialize, Deserialize, Default, Debug, PartialEq)]
#[reflect(opaque, serde)]
struct Rgb(u8, u8, u8);

#[test]
fn struct_info_lists_reflected_fields() {
    let info = Account::type_info().as_struct().unwrap();
    assert_eq!(
        info.field_names(),
        ["account_id", "tags", "audit", "extra", "labels"]
    );

    let id = info.field("account_id").unwrap();
    assert_eq!(id.rename(), Some("id"));
    assert_eq!(id.omit_empty(), None);
    assert!(!id.is_embedded());

    assert_eq!(info.field("tags").unwrap().omit_empty(), Some(false));
    assert!(info.field("audit").unwrap().is_embedded());
    assert!(info.field("session").is_none());

    let extra = info.field("extra").unwrap();
    assert_eq!(extra.type_info().kind(), ReflectKind::Optional);

    let audit = Audit::type_info().as_struct().unwrap();
    assert_eq!(audit.field("revision").unwrap().omit_empty(), Some(true));
}

#[test]
fn struct_access_by_index() {
    let mut account = Account {
        account_id: 7,
        ..Default::default()
    };

    assert_eq!(account.field_len(), 5);
    assert_eq!(
        account.field_at(0).and_then(|f| f.downcast_ref::<u64>()),
        Some(&7)
    );
    assert!(account.field_at(5).is_none());

    let ReflectMut::Struct(view) = account.reflect_mut() else {
        panic!("expected a struct");
    };
    *view
        .field_mut("audit")
        .and_then(|audit| audit.downcast_mut::<Audit>())
        .unwrap() = Audit {
        created_by: "ops".into(),
        revision: 2,
    };
    assert_eq!(account.audit.revision, 2);
    assert_eq!(account.name_at(4), Some("labels"));
}

#[test]
fn type_paths() {
    assert_eq!(Account::type_path(), concat!(module_path!(), "::Account"));
    assert_eq!(Account::type_name(), "Account");
    assert_eq!(Account::module_path(), Some(module_path!()));

    assert_eq!(
        Page::<u8>::type_path(),
        concat!(module_path!(), "::Page<u8>")
    );
    assert_eq!(Page::<String>::type_name(), "Page<String>");
}

#[test]
fn generic_struct() {
    let info = Page::<u8>::type_info().as_struct().unwrap();
    let total = info.field("total").unwrap().type_info().as_optional().unwrap();
    assert!(total.inner_info().ty().is::<u8>());

    let page = Page::<u8> {
        items: vec![1, 2],
        total: None,
    };
    let debug = format!("{:?}", &page as &dyn Reflect);
    assert_eq!(debug, "Page<u8> { items: [1, 2], total: None }");
}

#[test]
fn recursive_struct() {
    let info = Node::type_info().as_struct().unwrap();
    let next = info.field("next").unwrap().type_info().as_optional().unwrap();
    // `Box<T>` is transparent.
    assert!(next.inner_info().ty().is::<Node>());

    let node = Node {
        value: 1,
        next: Some(Box::new(Node::default())),
    };
    let debug = format!("{:?}", &node as &dyn Reflect);
    assert_eq!(
        debug,
        "Node { value: 1, next: Some(Node { value: 0, next: None }) }"
    );
}

#[test]
fn unit_struct_has_no_fields() {
    let info = Marker::type_info().as_struct().unwrap();
    assert_eq!(info.field_len(), 0);
    assert!(Marker.field_at(0).is_none());
}

#[test]
fn opaque_serde_bridge() {
    assert_eq!(Rgb::type_info().kind(), ReflectKind::Opaque);

    let mut color = Rgb(1, 2, 3);
    assert!(matches!(color.reflect_ref(), ReflectRef::Opaque(_)));
    assert!(color.as_serialize().is_some());
    assert!(color.as_marshaler().is_none());

    let json = serde_json::json!([9, 8, 7]);
    let mut de = <dyn erased_serde::Deserializer>::erase(json);
    color.deserialize_in_place(&mut de).unwrap().unwrap();
    assert_eq!(color, Rgb(9, 8, 7));

    let mut plain = String::new();
    let mut de = <dyn erased_serde::Deserializer>::erase(serde_json::json!("x"));
    assert!(plain.deserialize_in_place(&mut de).is_none());
}
