use parkpasses_constants::config::{load_config, load_config_with_env};
use parkpasses_constants::{
    ConstantKey, ConstantValue, ConstantsError, ConstantsRegistry, ErrorKind,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempdir().unwrap();
    let err = load_config(Some(dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConstantsError::Config { .. }), "{err}");
}

#[test]
fn toml_overrides_feed_the_builder() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("constants.toml");
    fs::write(
        &path,
        "[overrides]\nPARK_PASSES_SUPPORT_EMAIL = \"help@example.org\"\nGST = 12\n",
    )?;

    let cfg = load_config(Some(&path))?;
    assert_eq!(cfg.overrides.len(), 2);

    let registry = ConstantsRegistry::builder().config(&cfg).build()?;
    assert_eq!(registry.gst(), 12);
    assert!(registry.error(ErrorKind::System).ends_with("contact us at: help@example.org"));
    Ok(())
}

#[test]
fn empty_file_yields_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("constants.json");
    fs::write(&path, "{}")?;

    let cfg = load_config(Some(&path))?;
    assert!(cfg.overrides.is_empty());

    let registry = ConstantsRegistry::builder().config(&cfg).build()?;
    assert_eq!(registry.value(ConstantKey::Gst), &ConstantValue::Integer(10));
    Ok(())
}

#[test]
fn environment_replaces_file_override() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("constants.toml");
    fs::write(&path, "[overrides]\nGST = 11\nPICA_LABEL = \"PICA\"\n")?;

    let env = [("PARKPASSES__OVERRIDES__GST".to_owned(), "13".to_owned())];
    let cfg = load_config_with_env(Some(&path), env)?;

    let keys: Vec<_> = cfg.overrides.keys().map(String::as_str).collect();
    assert_eq!(keys, ["GST", "PICA_LABEL"]);
    assert_eq!(cfg.overrides["GST"], ConstantValue::from("13"));

    let registry = ConstantsRegistry::builder().config(&cfg).build()?;
    assert_eq!(registry.gst(), 13);
    assert_eq!(registry.value(ConstantKey::PicaLabel).as_str(), Some("PICA"));
    Ok(())
}

#[test]
fn environment_alone_overrides_support_email() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("constants.json");
    fs::write(&path, "{}")?;

    let env = [(
        "PARKPASSES__OVERRIDES__PARK_PASSES_SUPPORT_EMAIL".to_owned(),
        "help@example.org".to_owned(),
    )];
    let cfg = load_config_with_env(Some(&path), env)?;
    let registry = ConstantsRegistry::builder().config(&cfg).build()?;
    assert!(registry.error(ErrorKind::System).ends_with("contact us at: help@example.org"));
    Ok(())
}

#[test]
fn unrelated_environment_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("constants.toml");
    fs::write(&path, "[overrides]\nGST = 11\n")?;

    let env = [("OTHER__OVERRIDES__GST".to_owned(), "99".to_owned())];
    let cfg = load_config_with_env(Some(&path), env)?;
    assert_eq!(cfg.overrides.len(), 1);
    assert_eq!(cfg.overrides["GST"], ConstantValue::Integer(11));
    Ok(())
}

#[test]
fn two_spellings_of_one_key_in_a_file_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("constants.toml");
    fs::write(&path, "[overrides]\nGST = 11\ngst = 12\n")?;

    let err = load_config_with_env(Some(&path), Vec::<(String, String)>::new()).unwrap_err();
    assert!(matches!(err, ConstantsError::Config { .. }), "{err}");
    Ok(())
}
