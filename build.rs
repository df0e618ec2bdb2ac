use std::fs;

const CONFIG_PATH: &str = "src/default_config.toml";
const SURFACE_KEYS: [&str; 3] = ["title", "fallback_version", "close_label"];

fn main() {
    println!("cargo:rerun-if-changed={CONFIG_PATH}");

    let content = fs::read_to_string(CONFIG_PATH)
        .unwrap_or_else(|e| panic!("Failed to read {CONFIG_PATH}: {e}"));

    let table = content
        .parse::<toml::Table>()
        .unwrap_or_else(|e| panic!("Invalid {CONFIG_PATH}: {e}"));

    // The compiled default falls back silently, so a typo here must fail the build
    let Some(surface) = table.get("surface").and_then(toml::Value::as_table) else {
        panic!("{CONFIG_PATH} is missing the [surface] table");
    };
    for key in SURFACE_KEYS {
        if surface.get(key).and_then(toml::Value::as_str).is_none() {
            panic!("{CONFIG_PATH}: [surface] needs a string `{key}`");
        }
    }
}
