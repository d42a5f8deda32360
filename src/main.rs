//! Trunk entry point for the browser build. Native builds are a no-op; the
//! library is what `cargo test` exercises.

fn main() {
    #[cfg(feature = "csr")]
    agrilens::mount();
}
