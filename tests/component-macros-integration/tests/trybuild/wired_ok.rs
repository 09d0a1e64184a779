use component_macros::Injectable;
use di_abstractions::{Injectable, Wired};
use infrastructure_common::Component;

#[derive(Debug, Default, Injectable)]
struct Database;

impl Component for Database {}

#[derive(Debug, Default, Injectable)]
pub struct UserService {
    #[boot("wire")]
    pub database: Wired<Database>,
    #[boot("wire,name:replica")]
    pub r#replica: Wired<Database>,
    pub retries: u32,
}

impl Component for UserService {}

fn main() {
    let service = UserService::default();
    let names: Vec<&str> = service.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["database", "replica", "retries"]);
}
