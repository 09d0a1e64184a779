use component_macros::Injectable;
use di_abstractions::{Injectable, Wired};
use infrastructure_common::Component;
use std::any::TypeId;

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

trait Closer: Send + Sync {}

#[derive(Debug, Default, Injectable)]
#[injectable(provides(dyn Greeter, dyn Closer))]
struct Console {
    #[boot("wire")]
    pub peer: Wired<dyn Greeter>,
}

impl Greeter for Console {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

impl Closer for Console {}

impl Component for Console {}

fn main() {
    let capabilities = Console::capabilities();
    assert!(capabilities.satisfies(TypeId::of::<dyn Greeter>()));
    assert!(capabilities.satisfies(TypeId::of::<dyn Closer>()));
    assert_eq!(capabilities.len(), 2);
}
