//! String helpers

use std::collections::HashMap;

/// Memecah setiap string pada `sep` pertama: bagian kiri jadi key, kanan
/// jadi value. String tanpa `sep` menjadi key dengan value kosong.
///
/// Dipakai untuk argumen gaya `--name=value`.
pub fn split_strings_to_map<S: AsRef<str>>(strs: &[S], sep: &str) -> HashMap<String, String> {
    strs.iter()
        .map(|s| {
            let s = s.as_ref();
            match s.split_once(sep) {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (s.to_string(), String::new()),
            }
        })
        .collect()
}

/// Semua teks setelah kemunculan terakhir `sub`. Jika `sub` tidak ada,
/// `s` dikembalikan utuh.
pub fn after<'a>(s: &'a str, sub: &str) -> &'a str {
    match s.rfind(sub) {
        Some(index) if !sub.is_empty() => &s[index + sub.len()..],
        _ => s,
    }
}

/// Memecah `s` pada setiap `ch`, separator tidak ikut.
///
/// Segmen kosong di akhir (trailing separator) dibuang; input kosong
/// menghasilkan `Vec` kosong.
pub fn split_by_char(s: &str, ch: char) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts: Vec<&str> = s.split(ch).collect();
    if parts.last().is_some_and(|last| last.is_empty()) {
        parts.pop();
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_strings_to_map() {
        let map = split_strings_to_map(&["--port=8080", "--verbose", "a=b=c"], "=");

        assert_eq!(map["--port"], "8080");
        assert_eq!(map["--verbose"], "");
        assert_eq!(map["a"], "b=c");
    }

    #[test]
    fn test_after() {
        assert_eq!(after("a.b.c", "."), "c");
        assert_eq!(after("pkg::mod::Type", "::"), "Type");
        assert_eq!(after(".hidden", "."), "hidden");
        assert_eq!(after("plain", "."), "plain");
        assert_eq!(after("plain", ""), "plain");
    }

    #[test]
    fn test_split_by_char() {
        assert_eq!(split_by_char("a.b.c", '.'), vec!["a", "b", "c"]);
        assert_eq!(split_by_char("a.b", '.'), vec!["a", "b"]);
        assert_eq!(split_by_char("a.", '.'), vec!["a"]);
        assert_eq!(split_by_char("a..b", '.'), vec!["a", "", "b"]);
        assert_eq!(split_by_char("solo", '.'), vec!["solo"]);
        assert!(split_by_char("", '.').is_empty());
    }
}
