//! Process-wide default configuration
//!
//! The default is global state, so everything touching it lives in this one
//! test binary and in a single test function.

use serde::Serialize;
use structomap_core::config::KEY_CASE_ENV;
use structomap_core::{
    default_config, set_default_config, set_default_key_case, KeyCase, Projector, ProjectorConfig,
};

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct User {
    #[serde(rename = "ID")]
    id: u32,
    first_name: String,
}

fn user() -> User {
    User {
        id: 1,
        first_name: "Foo".to_string(),
    }
}

fn keys_of(projector: &mut Projector<User>) -> Vec<String> {
    projector
        .pick_all()
        .transform(&user())
        .unwrap()
        .keys()
        .cloned()
        .collect()
}

#[test]
fn test_default_case() {
    assert_eq!(default_config(), ProjectorConfig::default());
    assert_eq!(keys_of(&mut Projector::new()), vec!["FirstName", "ID"]);

    set_default_key_case(Some(KeyCase::Snake));
    assert_eq!(keys_of(&mut Projector::new()), vec!["first_name", "id"]);

    set_default_key_case(Some(KeyCase::Camel));
    assert_eq!(keys_of(&mut Projector::new()), vec!["firstName", "id"]);

    set_default_key_case(Some(KeyCase::Pascal));
    assert_eq!(keys_of(&mut Projector::new()), vec!["FirstName", "ID"]);

    // an explicit config ignores the default
    set_default_key_case(Some(KeyCase::Snake));
    let mut explicit = Projector::with_config(&ProjectorConfig::default());
    assert_eq!(keys_of(&mut explicit), vec!["FirstName", "ID"]);

    // existing projectors keep the casing they were built with
    let mut built_before = Projector::new();
    set_default_config(ProjectorConfig::default());
    assert_eq!(keys_of(&mut built_before), vec!["first_name", "id"]);
    assert_eq!(keys_of(&mut Projector::new()), vec!["FirstName", "ID"]);

    // environment-driven configuration
    std::env::set_var(KEY_CASE_ENV, "camelCase");
    let config = ProjectorConfig::from_env().unwrap();
    assert_eq!(config.key_case, Some(KeyCase::Camel));

    std::env::set_var(KEY_CASE_ENV, "screaming");
    assert!(ProjectorConfig::from_env().is_err());

    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        use structomap_core::Error;

        std::env::set_var(KEY_CASE_ENV, OsStr::from_bytes(b"sn\xffake"));
        let err = ProjectorConfig::from_env().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains(KEY_CASE_ENV));
    }

    std::env::set_var(KEY_CASE_ENV, "  ");
    assert_eq!(ProjectorConfig::from_env().unwrap(), ProjectorConfig::default());

    std::env::remove_var(KEY_CASE_ENV);
    assert_eq!(ProjectorConfig::from_env().unwrap(), ProjectorConfig::default());
}
