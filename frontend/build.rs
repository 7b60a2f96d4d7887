// Desktop builds on Linux link against system webview and input libraries.
// Report every missing one up front instead of failing deep in the linker.

const LINUX_DESKTOP_LIBS: [(&str, &str, &str); 2] = [
    ("webkit2gtk-4.1", "webkit2gtk4.1-devel", "libwebkit2gtk-4.1-dev"),
    ("libxdo", "libxdo-devel", "libxdo-dev"),
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let is_desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let is_linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if !(is_desktop && is_linux) {
        return;
    }

    let missing: Vec<_> = LINUX_DESKTOP_LIBS
        .iter()
        .filter(|(lib, _, _)| !has_library(lib))
        .collect();
    if missing.is_empty() {
        return;
    }

    eprintln!();
    eprintln!("  error: the Tallybook desktop build needs these system libraries:");
    for (lib, _, _) in &missing {
        eprintln!("    - {}", lib);
    }
    let fedora: Vec<&str> = missing.iter().map(|(_, rpm, _)| *rpm).collect();
    let debian: Vec<&str> = missing.iter().map(|(_, _, deb)| *deb).collect();
    eprintln!();
    eprintln!("    Fedora/RHEL:   sudo dnf install {}", fedora.join(" "));
    eprintln!("    Debian/Ubuntu: sudo apt install {}", debian.join(" "));
    eprintln!();
    eprintln!("  Or run in the browser instead: dx serve");
    eprintln!();
    std::process::exit(1);
}

/// pkg-config first; some distros ship libxdo without a .pc file, so fall back to ldconfig.
fn has_library(lib: &str) -> bool {
    let via_pkg_config = std::process::Command::new("pkg-config")
        .args(["--exists", lib])
        .status()
        .map(|s| s.success())
        .unwrap_or(false);
    via_pkg_config
        || std::process::Command::new("ldconfig")
            .arg("-p")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains(lib))
            .unwrap_or(false)
}
