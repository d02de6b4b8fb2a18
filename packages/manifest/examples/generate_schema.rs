use envseed_manifest::EnvironmentDescriptor;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(EnvironmentDescriptor);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}
