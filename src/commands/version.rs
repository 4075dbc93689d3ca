//! Print the build version

/// Version stamped at build time via `TELEJI_VERSION`, else the crate version.
pub const VERSION: &str = match option_env!("TELEJI_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// CLI entry point
pub fn run() {
    println!("{}", VERSION);
}
