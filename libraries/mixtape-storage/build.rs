//! Build script for mixtape-storage.
//!
//! This script ensures the crate is rebuilt when the schema scripts change.

fn main() {
    // Trigger rebuild when migrations change
    println!("cargo:rerun-if-changed=migrations");
}
