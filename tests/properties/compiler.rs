//! Property tests for the descriptor compiler and renderer.

use proptest::prelude::*;

use gia::domain::services::effective_environment_names;
use gia::{compile, render_json, render_yaml, ComposeDescriptor, ProjectConfig};

use super::strategies::{build, script};

/// Same project without applications/databases whose trimmed name is blank
fn without_blank_entities(config: &ProjectConfig) -> ProjectConfig {
    let mut stripped = config.clone();
    stripped.applications.retain(|a| !a.name.trim().is_empty());
    stripped.databases.retain(|d| !d.name.trim().is_empty());

    // A non-empty application list still counts when every name is blank.
    if stripped.applications.is_empty() {
        if let Some(first) = config.applications.first() {
            stripped.applications.push(first.clone());
        }
    }
    stripped
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Without applications the output is the version-only skeleton.
    #[test]
    fn property_no_applications_is_skeleton(steps in script()) {
        let mut config = build(&steps).config().clone();
        config.applications.clear();

        prop_assert_eq!(compile(&config), ComposeDescriptor::skeleton());
    }

    /// PROPERTY: Rendering the same descriptor twice is byte-identical.
    #[test]
    fn property_render_is_deterministic(steps in script()) {
        let config = build(&steps).config().clone();
        let descriptor = compile(&config);

        prop_assert_eq!(render_yaml(&descriptor), render_yaml(&descriptor));
        prop_assert_eq!(render_json(&descriptor), render_json(&descriptor));
        prop_assert_eq!(compile(&config), descriptor);
    }

    /// PROPERTY: Blank-named apps and databases contribute nothing.
    #[test]
    fn property_blank_names_are_skipped(steps in script()) {
        let config = build(&steps).config().clone();

        let stripped = without_blank_entities(&config);
        let a = compile(&config);
        let b = compile(&stripped);
        prop_assert_eq!(a.services, b.services);
        prop_assert_eq!(a.networks, b.networks);
        prop_assert_eq!(a.volumes, b.volumes);
    }

    /// PROPERTY: Empty maps are omitted, never rendered as empty.
    #[test]
    fn property_present_maps_are_non_empty(steps in script()) {
        let descriptor = compile(build(&steps).config());

        prop_assert!(descriptor.services.as_ref().map_or(true, |m| !m.is_empty()));
        prop_assert!(descriptor.networks.as_ref().map_or(true, |m| !m.is_empty()));
        prop_assert!(descriptor.volumes.as_ref().map_or(true, |m| !m.is_empty()));
    }

    /// PROPERTY: Networks are exactly `internal_<env>` for environments that got services.
    #[test]
    fn property_networks_follow_environments(steps in script()) {
        let config = build(&steps).config().clone();
        let descriptor = compile(&config);

        let has_named_entity = !config.applications.is_empty()
            && (config.applications.iter().any(|a| !a.name.trim().is_empty())
                || config.databases.iter().any(|d| !d.name.trim().is_empty()));

        let mut expected: Vec<String> = Vec::new();
        if has_named_entity {
            for env in effective_environment_names(&config) {
                let network = format!("internal_{}", env);
                if !expected.contains(&network) {
                    expected.push(network);
                }
            }
        }

        let actual: Vec<String> = descriptor
            .network_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: Every database service mounts the `<name>_data` volume it declares.
    #[test]
    fn property_database_volumes_are_declared(steps in script()) {
        let descriptor = compile(build(&steps).config());
        let declared = descriptor.volume_names();

        if let Some(services) = &descriptor.services {
            for spec in services.values() {
                for mount in spec.volumes.iter().flatten() {
                    let volume = mount.split(':').next().unwrap_or_default();
                    prop_assert!(declared.contains(&volume), "undeclared volume {}", volume);
                }
            }
        }
    }

    /// PROPERTY: YAML output parses back to the same descriptor.
    #[test]
    fn property_yaml_parses_back(steps in script()) {
        let descriptor = compile(build(&steps).config());
        let parsed: ComposeDescriptor = serde_yaml_ng::from_str(&render_yaml(&descriptor)).unwrap();

        prop_assert_eq!(parsed, descriptor);
    }
}
