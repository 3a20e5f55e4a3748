use std::env;
use std::fs;
use std::path::Path;

/// Keys forwarded to `option_env!` in `src/config.rs`.
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "REMEMBER_ME_HOURS",
    "ROWS_PER_PAGE",
    "SUCCESS_DISMISS_MS",
];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
