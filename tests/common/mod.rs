use metrics_analyzer::constants::GROQ_API_KEY_ENV;
use std::env;

/// Run `f` with `GROQ_API_KEY` set to `value` (or removed for `None`),
/// restoring the previous value afterwards. Callers must be `#[serial]`.
#[allow(dead_code)]
pub fn with_api_key_env<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
    let previous = env::var(GROQ_API_KEY_ENV).ok();

    match value {
        Some(v) => env::set_var(GROQ_API_KEY_ENV, v),
        None => env::remove_var(GROQ_API_KEY_ENV),
    }

    let result = f();

    match previous {
        Some(v) => env::set_var(GROQ_API_KEY_ENV, v),
        None => env::remove_var(GROQ_API_KEY_ENV),
    }

    result
}
