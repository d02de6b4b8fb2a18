/// Descriptor file names, in discovery order.
pub const DESCRIPTOR_TOML: &str = "envseed.toml";
pub const DESCRIPTOR_JSON: &str = "envseed.json";
pub const DESCRIPTOR_YAML: &str = "envseed.yaml";
