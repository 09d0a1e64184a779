//! Injectable 派生宏集成测试
use component_macros::Injectable;
use di_abstractions::{
    parse_field_tag, Entry, Injectable, TargetType, Wired, WiringInstruction,
};
use infrastructure_common::{Component, DependencyErrorKind, QualifiedName};
use std::any::TypeId;
use std::sync::Arc;

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

#[derive(Debug, Default, Injectable)]
#[injectable(provides(dyn Greeter))]
struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

impl Component for English {}

#[derive(Debug, Default, Injectable)]
struct Mailer {
    pub retries: u32,
    #[boot("wire")]
    pub greeter: Wired<dyn Greeter>,
    #[boot("wire,name:backup")]
    pub fallback: Wired<English>,
    #[boot("wire")]
    hidden: Wired<English>,
    #[boot("wire")]
    pub inline: English,
    #[boot("inject")]
    pub foreign: Wired<English>,
}

impl Component for Mailer {}

#[test]
fn test_fields_in_declaration_order() {
    let mailer = Mailer::default();
    let names: Vec<&str> = mailer.fields().iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        ["retries", "greeter", "fallback", "hidden", "inline", "foreign"]
    );
    assert!(mailer.fields().iter().all(|f| f.owner == "Mailer"));
}

#[test]
fn test_field_metadata() {
    let fields = Mailer::default().fields();

    assert_eq!(fields[0].tag, None);
    assert!(matches!(fields[0].target, TargetType::Value { .. }));

    assert_eq!(fields[1].tag, Some("wire"));
    assert_eq!(fields[1].target.type_id(), Some(TypeId::of::<dyn Greeter>()));
    assert!(matches!(fields[1].target, TargetType::Capability { .. }));

    assert_eq!(fields[2].tag, Some("wire,name:backup"));
    assert_eq!(fields[2].target, TargetType::concrete::<English>());

    assert!(!fields[3].settable);
    assert!(fields.iter().filter(|f| f.name != "hidden").all(|f| f.settable));

    assert!(matches!(fields[4].target, TargetType::Value { .. }));
}

#[test]
fn test_tags_parse_from_derived_fields() {
    let fields = Mailer::default().fields();

    assert_eq!(parse_field_tag(&fields[0]).unwrap(), WiringInstruction::Absent);
    assert_eq!(parse_field_tag(&fields[1]).unwrap(), WiringInstruction::Unnamed);
    assert_eq!(
        parse_field_tag(&fields[2]).unwrap(),
        WiringInstruction::Named("backup".to_string())
    );
    assert_eq!(parse_field_tag(&fields[5]).unwrap(), WiringInstruction::Absent);
}

#[test]
fn test_inject_public_wired_field() {
    let mailer = Mailer::default();
    let english = Arc::new(English);

    mailer.inject("fallback", Box::new(english.clone())).unwrap();
    assert!(mailer.fallback.ptr_eq(&english));

    let greeter: Arc<dyn Greeter> = english;
    mailer.inject("greeter", Box::new(greeter)).unwrap();
    assert_eq!(mailer.greeter.get().unwrap().greet(), "hello");
}

#[test]
fn test_inject_rejections() {
    let mailer = Mailer::default();

    let err = mailer
        .inject("hidden", Box::new(Arc::new(English)))
        .unwrap_err();
    assert_eq!(err.kind(), DependencyErrorKind::NotSettable);
    assert_eq!(
        err.to_string(),
        "Error dependency value cannot be set into <Mailer.hidden>"
    );

    let err = mailer.inject("retries", Box::new(3_u32)).unwrap_err();
    assert_eq!(err.kind(), DependencyErrorKind::NotSettable);

    let err = mailer.inject("fallback", Box::new(English)).unwrap_err();
    assert_eq!(err.kind(), DependencyErrorKind::NotSettable);
    assert!(!mailer.fallback.is_wired());
}

#[test]
fn test_declared_capabilities() {
    let capabilities = English::capabilities();
    assert!(capabilities.satisfies(TypeId::of::<dyn Greeter>()));
    assert_eq!(capabilities.len(), 1);
    assert!(Mailer::capabilities().is_empty());
}

#[test]
fn test_entry_provides_self_and_capabilities() {
    let entry = Entry::new("default", Arc::new(English));

    assert_eq!(entry.qualified_name(), QualifiedName::of::<English>());
    assert!(entry.satisfies(TypeId::of::<English>()));
    assert!(entry.satisfies(TypeId::of::<dyn Greeter>()));
    assert!(!entry.satisfies(TypeId::of::<Mailer>()));

    let greeter = entry
        .provide(TypeId::of::<dyn Greeter>())
        .and_then(|value| value.downcast::<Arc<dyn Greeter>>().ok())
        .unwrap();
    assert_eq!(greeter.greet(), "hello");
}
