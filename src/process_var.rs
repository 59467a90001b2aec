//! Process variables: nilai yang di-override dari environment atau CLI
//!
//! Urutan prioritas (yang terakhir menang):
//! 1. Default value
//! 2. Environment variable `PREFIX_NAME`
//! 3. Argumen command line `--name=value`
//!
//! Prefix adalah bagian dari [`ProcessVars`], bukan global, sehingga
//! inisialisasi deterministik dan mudah di-test.

use crate::util::maps::transform_map_keys;
use crate::util::strings::split_strings_to_map;
use std::collections::HashMap;
use tracing::warn;

/// Tipe primitif yang bisa di-parse dari string environment/CLI.
pub trait ProcessValue: Sized {
    /// Nilai baru dari `raw`, atau `None` jika `raw` tidak valid
    fn parse_process_value(raw: &str) -> Option<Self>;
}

impl ProcessValue for bool {
    /// Menerima `1 t T TRUE true True 0 f F FALSE false False`.
    /// String lain dianggap `false`.
    fn parse_process_value(raw: &str) -> Option<Self> {
        Some(matches!(raw, "1" | "t" | "T" | "TRUE" | "true" | "True"))
    }
}

impl ProcessValue for String {
    fn parse_process_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

macro_rules! impl_process_value_from_str {
    ($($t:ty),* $(,)?) => {
        $(
            impl ProcessValue for $t {
                fn parse_process_value(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }
            }
        )*
    };
}

impl_process_value_from_str!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Snapshot environment dan argumen CLI, plus prefix untuk nama env.
#[derive(Debug, Clone, Default)]
pub struct ProcessVars {
    prefix: String,
    env: HashMap<String, String>,
    // Key sudah lower-case dan tanpa `--`
    args: HashMap<String, String>,
}

impl ProcessVars {
    /// Snapshot dari `std::env::vars()` dan `std::env::args()` (tanpa argv[0])
    pub fn from_process(prefix: impl Into<String>) -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::new(prefix, std::env::vars(), args)
    }

    /// Sumber eksplisit, terutama untuk test
    pub fn new<E, A, S>(prefix: impl Into<String>, env: E, args: A) -> Self
    where
        E: IntoIterator<Item = (String, String)>,
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw_args: Vec<S> = args.into_iter().collect();
        let args = transform_map_keys(split_strings_to_map(&raw_args, "="), |key| {
            key.strip_prefix("--").unwrap_or(&key).to_lowercase()
        });

        Self {
            prefix: prefix.into(),
            env: env.into_iter().collect(),
            args,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Nama environment variable untuk `name`: `PREFIX_NAME`, atau `NAME`
    /// jika prefix kosong.
    pub fn env_key(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_uppercase()
        } else {
            format!("{}_{}", self.prefix, name.to_uppercase())
        }
    }

    /// Resolve `name` mulai dari `default`, lalu env, lalu CLI.
    ///
    /// Nilai kosong di-skip. Nilai yang gagal di-parse tidak mengubah hasil
    /// sebelumnya. Argumen CLI tanpa `=` (flag) dibaca sebagai `"true"`.
    pub fn get<T: ProcessValue>(&self, name: &str, default: T) -> T {
        let mut value = default;

        let env_key = self.env_key(name);
        if let Some(raw) = self.env.get(&env_key) {
            apply(&mut value, raw, &env_key);
        }

        if let Some(raw) = self.args.get(&name.to_lowercase()) {
            let raw = if raw.is_empty() { "true" } else { raw.as_str() };
            apply(&mut value, raw, name);
        }

        value
    }
}

fn apply<T: ProcessValue>(value: &mut T, raw: &str, source: &str) {
    if raw.is_empty() {
        return;
    }

    match T::parse_process_value(raw) {
        Some(parsed) => *value = parsed,
        None => warn!(source, raw, "ignoring unparseable process variable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_when_missing() {
        let vars = ProcessVars::new("APP", Vec::new(), Vec::<String>::new());

        assert_eq!(vars.get("port", 8080u16), 8080);
        assert_eq!(vars.get("name", "svc".to_string()), "svc");
    }

    #[test]
    fn test_env_overrides_default() {
        let vars = ProcessVars::new("APP", env(&[("APP_PORT", "9000")]), Vec::<String>::new());

        assert_eq!(vars.env_key("port"), "APP_PORT");
        assert_eq!(vars.get("port", 8080u16), 9000);
    }

    #[test]
    fn test_cli_overrides_env() {
        let vars = ProcessVars::new(
            "APP",
            env(&[("APP_PORT", "9000"), ("APP_RATIO", "0.5")]),
            ["--port=7000", "--Ratio=0.25"],
        );

        assert_eq!(vars.get("port", 8080u16), 7000);
        assert_eq!(vars.get("ratio", 1.0f64), 0.25);
    }

    #[test]
    fn test_empty_prefix() {
        let vars = ProcessVars::new("", env(&[("LEVEL", "3")]), Vec::<String>::new());

        assert_eq!(vars.env_key("level"), "LEVEL");
        assert_eq!(vars.get("level", 1i32), 3);
    }

    #[test]
    fn test_flag_means_true() {
        let vars = ProcessVars::new("APP", Vec::new(), ["--verbose"]);
        assert!(vars.get("verbose", false));
    }

    #[test]
    fn test_unparseable_keeps_previous() {
        let vars = ProcessVars::new(
            "APP",
            env(&[("APP_WORKERS", "4")]),
            ["--workers=many", "--small=300"],
        );

        assert_eq!(vars.get("workers", 1u32), 4);
        assert_eq!(vars.get("small", 7u8), 7);
    }

    #[test]
    fn test_bool_parsing() {
        let vars = ProcessVars::new(
            "APP",
            env(&[("APP_A", "T"), ("APP_B", "0"), ("APP_C", "yes")]),
            Vec::<String>::new(),
        );

        assert!(vars.get("a", false));
        assert!(!vars.get("b", true));
        // String yang tidak dikenal jatuh ke false
        assert!(!vars.get("c", true));
    }

    #[test]
    fn test_empty_env_value_is_ignored() {
        let vars = ProcessVars::new("APP", env(&[("APP_NAME", "")]), ["--name="]);

        // `--name=` adalah flag, jadi string "true"
        assert_eq!(vars.get("name", "x".to_string()), "true");

        let vars = ProcessVars::new("APP", env(&[("APP_NAME", "")]), Vec::<String>::new());
        assert_eq!(vars.get("name", "x".to_string()), "x");
    }
}
