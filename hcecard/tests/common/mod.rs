// Shared helpers for the integration test crates under `tests/`.
#![allow(dead_code)]


/// Route `log` output through env_logger; safe to call from every test.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
