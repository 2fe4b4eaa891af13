use std::env;
use std::fs;
use std::path::Path;

const KEYS: [&str; 5] = [
    "BURGER_API_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "ACCESS_TOKEN_COOKIE",
    "REFRESH_TOKEN_KEY",
];

fn main() {
    // Recompilar si cambia la configuración
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            if !KEYS.contains(&key) {
                println!("cargo:warning=.env: clave desconocida {}", key);
                continue;
            }
            // El entorno real tiene prioridad sobre .env
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
