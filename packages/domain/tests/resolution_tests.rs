use domain::{resolve, PinnedCollection, ResolveError};
use envseed_manifest::EnvironmentDescriptor;
use pretty_assertions::assert_eq;

fn names(packages: &[domain::ResolvedPackage]) -> Vec<&str> {
    packages.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_linux_shell_has_exactly_the_cross_platform_packages() {
    let descriptor = EnvironmentDescriptor::default();
    let collection = PinnedCollection::pinned_default();

    let resolution = resolve(&descriptor, "x86_64-linux", &collection).unwrap();

    assert_eq!(
        names(&resolution.dev_shell.packages),
        vec!["python3", "uv", "ruff", "libffi"]
    );
}

#[test]
fn test_darwin_shell_appends_the_apple_frameworks() {
    let descriptor = EnvironmentDescriptor::default();
    let collection = PinnedCollection::pinned_default();

    let resolution = resolve(&descriptor, "aarch64-darwin", &collection).unwrap();

    assert_eq!(
        names(&resolution.dev_shell.packages),
        vec!["python3", "uv", "ruff", "libffi", "IOKit", "Security"]
    );
}

#[test]
fn test_every_supported_system_resolves_with_empty_libraries() {
    let descriptor = EnvironmentDescriptor::default();
    let collection = PinnedCollection::pinned_default();

    for system in &descriptor.systems {
        let resolution = resolve(&descriptor, system, &collection).unwrap();
        assert_eq!(resolution.default_artifact.package.name, "python3");
        assert!(
            resolution.default_artifact.libraries.is_empty(),
            "{} bundles libraries",
            system
        );
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let descriptor = EnvironmentDescriptor::default();
    let collection = PinnedCollection::pinned_default();

    let first = resolve(&descriptor, "x86_64-darwin", &collection).unwrap();
    let second = resolve(&descriptor, "x86_64-darwin", &collection).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_hook_is_a_single_shell_launch() {
    let descriptor = EnvironmentDescriptor::default();
    let collection = PinnedCollection::pinned_default();

    let resolution = resolve(&descriptor, "aarch64-linux", &collection).unwrap();

    assert_eq!(resolution.dev_shell.hook, "exec zsh");
    assert!(!resolution.dev_shell.hook.contains('\n'));
}

#[test]
fn test_unsupported_platform_is_rejected() {
    let descriptor = EnvironmentDescriptor::default();
    let collection = PinnedCollection::pinned_default();

    for platform in ["riscv64-linux", "x86_64-windows", "mips-irix", ""] {
        let err = resolve(&descriptor, platform, &collection).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnsupportedPlatform {
                platform: platform.to_string()
            }
        );
    }
}

#[test]
fn test_platform_outside_declared_systems_is_rejected() {
    let mut descriptor = EnvironmentDescriptor::default();
    descriptor.systems.retain(|s| s != "x86_64-darwin");
    let collection = PinnedCollection::pinned_default();

    let err = resolve(&descriptor, "x86_64-darwin", &collection).unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnsupportedPlatform {
            platform: "x86_64-darwin".to_string()
        }
    );
}

#[test]
fn test_missing_package_aborts_the_whole_resolution() {
    let mut descriptor = EnvironmentDescriptor::default();
    descriptor
        .shell
        .packages
        .push(envseed_manifest::PackageRef::from("imaginary-tool"));
    let collection = PinnedCollection::pinned_default();

    let err = resolve(&descriptor, "x86_64-linux", &collection).unwrap_err();
    match err {
        ResolveError::PackageResolution { package, .. } => {
            assert_eq!(package, "imaginary-tool");
        }
        other => panic!("Expected PackageResolution, got {:?}", other),
    }
}

#[test]
fn test_blank_pin_surfaces_as_upstream_fetch_failure() {
    let mut descriptor = EnvironmentDescriptor::default();
    if let Some(input) = descriptor.inputs.get_mut("utils") {
        input.pin = envseed_manifest::Pin::Rev("  ".to_string());
    }
    let collection = PinnedCollection::pinned_default();

    let err = resolve(&descriptor, "x86_64-linux", &collection).unwrap_err();
    assert!(matches!(err, ResolveError::UpstreamFetch(_)));
}

#[test]
fn test_descriptor_without_systems_is_rejected_before_lookup() {
    let mut descriptor = EnvironmentDescriptor::default();
    descriptor.systems.clear();
    let collection = PinnedCollection::pinned_default();

    let err = resolve(&descriptor, "x86_64-linux", &collection).unwrap_err();
    assert!(matches!(err, ResolveError::Descriptor(_)));
}
