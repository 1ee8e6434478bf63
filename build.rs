use std::env;
use std::fs;
use std::path::Path;

// Expone las variables de .env como variables de entorno de compilación
// (API_URL_*, CLOUDINARY_*, ENVIRONMENT). Ver src/config.rs.
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
                    // Las variables ya definidas en el entorno tienen prioridad
                    if env::var(key.trim()).is_err() {
                        println!("cargo:rustc-env={}={}", key.trim(), value.trim());
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No hay archivo .env; se usan los valores por defecto.");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
