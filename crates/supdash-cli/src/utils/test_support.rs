use std::sync::{Mutex, OnceLock};

/// Serialises tests that read or mutate process environment variables.
pub fn env_mutex() -> &'static Mutex<()> {
    static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_MUTEX.get_or_init(Mutex::default)
}
