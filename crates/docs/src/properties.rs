//! # キー・値形式テキストの読み取り
//!
//! `version.properties` のような Java properties 形式のテキストを読む。
//!
//! 対応している書式:
//!
//! - `key=value` / `key: value` / `key value`
//! - `#` または `!` で始まるコメント行
//! - 行末 `\` による継続行
//! - `\t` `\n` `\r` `\f` `\uXXXX` エスケープ
//!
//! 同じキーが複数回現れた場合は後勝ち。

use std::collections::HashMap;

/// 読み取り済みのプロパティ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// テキストを読み取る
    ///
    /// 解釈できない行は存在しない。区切り文字のない行はキーのみ（値は空）として扱う。
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();
        for line in logical_lines(text) {
            let (key, value) = split_entry(&line);
            entries.insert(unescape(key), unescape(value));
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 継続行を連結し、空行とコメント行を取り除いた論理行を返す
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<String> = None;

    for physical in text.lines() {
        let trimmed = physical.trim_start();
        let continuing = current.is_some();

        if !continuing && (trimmed.is_empty() || trimmed.starts_with(['#', '!'])) {
            continue;
        }

        let (content, continues) = match trimmed.strip_suffix('\\') {
            // 末尾のバックスラッシュが奇数個なら継続
            Some(head) if trailing_backslashes(head) % 2 == 0 => (head, true),
            _ => (trimmed, false),
        };

        let mut line = current.take().unwrap_or_default();
        line.push_str(content);
        if continues {
            current = Some(line);
        } else {
            lines.push(line);
        }
    }

    if let Some(line) = current {
        lines.push(line);
    }
    lines
}

fn trailing_backslashes(s: &str) -> usize {
    s.chars().rev().take_while(|c| *c == '\\').count()
}

/// 論理行をキーと値に分ける
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\u{000C}' => {
                key_end = index;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let rest = line[key_end..].trim_start_matches([' ', '\t', '\u{000C}']);
    let rest = rest
        .strip_prefix(['=', ':'])
        .map_or(rest, |value| value.trim_start_matches([' ', '\t', '\u{000C}']));
    (key, rest)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("version=7.0.0")]
    #[case("version = 7.0.0")]
    #[case("version: 7.0.0")]
    #[case("version 7.0.0")]
    #[case("  version=7.0.0")]
    #[case("version\t=\t7.0.0")]
    fn test_区切り文字のバリエーションを読める(#[case] text: &str) {
        let properties = Properties::parse(text);

        assert_eq!(properties.get("version"), Some("7.0.0"));
    }

    #[test]
    fn test_コメント行と空行は無視される() {
        let text = "# generated by build\n\n! legacy comment\nversion=7.0.0\n";

        let properties = Properties::parse(text);

        assert_eq!(properties.len(), 1);
        assert_eq!(properties.get("version"), Some("7.0.0"));
    }

    #[test]
    fn test_継続行が連結される() {
        let text = "description=online \\\n    generator\nversion=7.0.0";

        let properties = Properties::parse(text);

        assert_eq!(properties.get("description"), Some("online generator"));
        assert_eq!(properties.get("version"), Some("7.0.0"));
    }

    #[test]
    fn test_エスケープされた区切り文字はキーに含まれる() {
        let properties = Properties::parse("a\\=b=c");

        assert_eq!(properties.get("a=b"), Some("c"));
    }

    #[test]
    fn test_unicodeエスケープを解釈する() {
        let properties = Properties::parse("name=\\u0041PI");

        assert_eq!(properties.get("name"), Some("API"));
    }

    #[test]
    fn test_同じキーは後勝ち() {
        let properties = Properties::parse("version=1\nversion=2");

        assert_eq!(properties.get("version"), Some("2"));
    }

    #[test]
    fn test_値のないキーは空文字になる() {
        let properties = Properties::parse("version");

        assert_eq!(properties.get("version"), Some(""));
    }

    #[test]
    fn test_crlf改行を扱える() {
        let properties = Properties::parse("version=7.0.0\r\nname=online\r\n");

        assert_eq!(properties.get("version"), Some("7.0.0"));
        assert_eq!(properties.get("name"), Some("online"));
    }
}
