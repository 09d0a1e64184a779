//! trybuild UI tests for component_macros

#[test]
fn ui_injectable_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/wired_ok.rs");
    t.pass("tests/trybuild/capability_ok.rs");
}
