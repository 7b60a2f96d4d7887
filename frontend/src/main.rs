//! Tallybook frontend - Dioxus app.
//! Default: web (cargo run). Desktop: cargo run --features desktop.

#[cfg(target_arch = "wasm32")]
fn main() {
    dioxus::launch(tallybook_frontend::app::App);
}

#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
fn main() {
    use dioxus::prelude::*;
    use tallybook_core::Config;
    use tallybook_frontend::app::{set_config, App};

    dotenv::dotenv().ok();
    match Config::from_env() {
        Ok(config) => set_config(config),
        Err(e) => eprintln!("Ignoring TALLYBOOK_* settings: {:#}", e),
    }
    launch(App);
}

/// Native `cargo run` with the web feature hands over to the Dioxus CLI.
#[cfg(all(not(target_arch = "wasm32"), feature = "web", not(feature = "desktop")))]
fn main() {
    // Force wasm build without reference-types so wasm-bindgen doesn't fail with
    // "failed to find intrinsics to enable clone_ref" (Rust 1.82+ default).
    // Run via shell so RUSTFLAGS is set in the same process as dx.
    let rustflags = std::env::var("RUSTFLAGS").unwrap_or_default();
    let rustflags = if rustflags.is_empty() {
        "-C target-feature=-reference-types".to_string()
    } else {
        format!("{} -C target-feature=-reference-types", rustflags)
    };
    let status = std::process::Command::new("sh")
        .args(["-c", &format!("export RUSTFLAGS='{}'; exec dx serve", rustflags.replace('\'', "'\"'\"'"))])
        .status();
    match status {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {}", e);
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            std::process::exit(1);
        }
    }
}
