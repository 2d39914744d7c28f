use std::env;
use std::path::PathBuf;

const CONTACT_VARS: [&str; 4] = [
    "AVIV_WHATSAPP_NUMBER",
    "AVIV_PHONE_NUMBER",
    "AVIV_PHONE_DISPLAY",
    "AVIV_EMAIL",
];

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let env_path = manifest_dir.join(".env");
    let env_local_path = manifest_dir.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    for name in CONTACT_VARS {
        println!("cargo:rerun-if-env-changed={name}");
        println!("cargo:rerun-if-env-changed=TRUNK_PUBLIC_{name}");
        let value = env::var(name)
            .or_else(|_| env::var(format!("TRUNK_PUBLIC_{name}")))
            .unwrap_or_default();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if value.contains('\n') {
            panic!("{name} must be a single line");
        }
        println!("cargo:rustc-env={name}={value}");
    }
}
