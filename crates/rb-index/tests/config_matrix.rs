use rb_index::{RbTree, TreeConfig};

#[test]
fn config_from_toml_matrix() {
    let config: TreeConfig = toml::from_str(
        r#"
        initial_capacity = 256
        max_nodes = 1000
        verify_after_mutation = true
        "#,
    )
    .unwrap();
    assert_eq!(
        config,
        TreeConfig::new()
            .with_initial_capacity(256)
            .with_max_nodes(1000)
            .with_verify_after_mutation(true)
    );

    let tree = RbTree::with_config(config.clone());
    assert_eq!(tree.config(), &config);
}

#[test]
fn config_missing_fields_use_defaults_matrix() {
    let config: TreeConfig = toml::from_str("max_nodes = 4").unwrap();
    assert_eq!(config, TreeConfig::new().with_max_nodes(4));

    let config: TreeConfig = toml::from_str("").unwrap();
    assert_eq!(config, TreeConfig::default());
}

#[test]
fn config_toml_round_trip_matrix() {
    let config = TreeConfig::new().with_initial_capacity(8);
    let text = toml::to_string(&config).unwrap();
    let back: TreeConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}
