use crate::Environment;

use googletest::prelude::*;

#[test]
fn production_names_parse_to_production() {
    assert_that!(
        "production".parse::<Environment>().unwrap(),
        eq(Environment::Production)
    );
    assert_that!(
        "PROD".parse::<Environment>().unwrap(),
        eq(Environment::Production)
    );
}

#[test]
fn anything_else_falls_back_to_development() {
    assert_that!(
        "staging".parse::<Environment>().unwrap(),
        eq(Environment::Development)
    );
}

#[test]
fn development_is_the_default() {
    assert_that!(Environment::default(), eq(Environment::Development));
    assert!(Environment::default().is_development());
    assert!(!Environment::Production.is_development());
}
