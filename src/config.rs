//! Runtime settings taken from the process environment.

use once_cell::sync::Lazy;

/// Environment variable holding the hosted worker base URL.
pub const WORKER_URL_ENV: &str = "ROOMIFY_WORKER_URL";

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "roomify=info";

/// Worker base URL, read once on first access. Empty when unset.
pub static WORKER_URL: Lazy<String> = Lazy::new(|| worker_url_from(std::env::var(WORKER_URL_ENV).ok()));

fn worker_url_from(value: Option<String>) -> String {
    value.map(|url| url.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_worker_url_defaults_to_empty() {
        assert_eq!(worker_url_from(None), "");
    }

    #[test]
    fn worker_url_is_trimmed() {
        assert_eq!(
            worker_url_from(Some(" https://worker.example.com \n".to_string())),
            "https://worker.example.com"
        );
    }
}
