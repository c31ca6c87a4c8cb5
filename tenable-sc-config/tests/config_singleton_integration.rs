use tenable_sc_config::config::{
    create_new,
    singleton::{get_config, initialize_config, initialize_from_file, is_initialized},
    load, ScConfigError,
};
use tenable_sc_config::file_ops::save;
use tempfile::tempdir;

// One test per file: the slot can only be filled once per process
#[test]
fn test_configuration_singleton_behavior() {
    let dir = tempdir().unwrap(); //#[allow_ci]

    // Missing and placeholder files leave the slot empty
    assert!(initialize_from_file(dir.path().join("absent.ini"))
        .unwrap() //#[allow_ci]
        .is_none());
    let template = dir.path().join("template.ini");
    save(&create_new(), &template).unwrap(); //#[allow_ci]
    assert!(initialize_from_file(&template).is_err());
    assert!(!is_initialized());
    assert!(get_config().is_none());

    let path = dir.path().join("sc.ini");
    std::fs::write(
        &path,
        "[SecurityCenter]\nhostname = scanner.example.com\n\n[User]\nusername = alice\npassword = s3cret\n",
    )
    .unwrap(); //#[allow_ci]

    let config = initialize_from_file(&path)
        .unwrap() //#[allow_ci]
        .unwrap(); //#[allow_ci]
    assert_eq!(config.hostname(), "scanner.example.com");
    assert!(is_initialized());
    assert_eq!(get_config(), Some(config));

    // A second initialization fails and keeps the first configuration
    let other = load(path.as_path()).unwrap(); //#[allow_ci]
    assert!(matches!(
        initialize_config(other),
        Err(ScConfigError::SingletonAlreadyInitialized)
    ));
    assert!(matches!(
        initialize_from_file(&path),
        Err(ScConfigError::SingletonAlreadyInitialized)
    ));
    assert_eq!(get_config().map(|c| c.username()), Some(Some("alice")));
}
