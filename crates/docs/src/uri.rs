//! # URI 参照の分解
//!
//! `GENERATOR_HOST` に設定された値をスキーム・オーソリティ・パスに分解する。
//!
//! RFC 3986 の文法で検証する。空白などの使用できない文字はエラーとし、
//! `ftp://host` のようにパスが空ならパスは空文字のまま返す。
//!
//! ```
//! use openapi_online_docs::uri::UriReference;
//!
//! let uri: UriReference = "https://api.example.com:8443/gen".parse().unwrap();
//! assert_eq!(uri.scheme(), Some("https"));
//! assert_eq!(uri.authority(), Some("api.example.com:8443"));
//! assert_eq!(uri.path(), "/gen");
//! ```

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::error::UriError;

/// RFC 3986 Appendix B の分解用正規表現
static URI_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$")
        .expect("URI 分解用の正規表現が不正です")
});

/// RFC 3986 のスキーム名
static SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").expect("スキーム名の正規表現が不正です")
});

/// RFC 3986 の予約文字・非予約文字（`%` を除く）
const URI_PUNCTUATION: &str = "-._~:/?#[]@!$&'()*+,;=";

/// 分解済みの URI 参照
///
/// オーソリティとパスはパーセントデコード済み。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriReference {
    scheme:    Option<String>,
    authority: Option<String>,
    path:      String,
    query:     Option<String>,
    fragment:  Option<String>,
}

impl UriReference {
    /// スキーム（例: `"https"`）
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// オーソリティ（`host:port`、ユーザー情報を含む場合はそれも含む）
    ///
    /// `//` の後が空の場合（`file:///x` など）は `None`。
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// パス
    ///
    /// 空パスや、スキームの後が `/` で始まらない不透明 URI（`mailto:a@b` 等）では `""`。
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl FromStr for UriReference {
    type Err = UriError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Err(UriError::Empty);
        }
        validate_characters(raw)?;

        let caps = URI_REFERENCE.captures(raw).ok_or(UriError::Malformed)?;
        let scheme = caps.get(1).map(|m| m.as_str());
        let authority = caps.get(2).map(|m| m.as_str());
        let path = caps.get(3).ok_or(UriError::Malformed)?;

        // `[` `]` は IPv6 リテラルとしてオーソリティ内にのみ現れてよい
        for component in [caps.get(3), caps.get(4), caps.get(5)].into_iter().flatten() {
            if let Some(offset) = component.as_str().find(['[', ']']) {
                let index = component.start() + offset;
                return Err(UriError::IllegalCharacter {
                    index,
                    character: raw[index..].chars().next().unwrap_or('['),
                });
            }
        }

        match scheme {
            Some(scheme) => {
                if !SCHEME.is_match(scheme) {
                    return Err(UriError::InvalidScheme(scheme.to_string()));
                }
                if raw.len() == scheme.len() + 1 {
                    return Err(UriError::MissingSchemeSpecificPart(scheme.to_string()));
                }
            }
            None if authority.is_none() => {
                let first_segment = path.as_str().split('/').next().unwrap_or_default();
                if first_segment.contains(':') {
                    return Err(UriError::ColonInRelativePath(path.as_str().to_string()));
                }
            }
            None => {}
        }

        if let Some(authority) = authority {
            let rest_is_empty =
                path.as_str().is_empty() && caps.get(4).is_none() && caps.get(5).is_none();
            if authority.is_empty() && rest_is_empty {
                return Err(UriError::MissingAuthority { index: raw.len() });
            }
            validate_authority(authority)?;
        }

        let opaque = scheme.is_some() && authority.is_none() && !path.as_str().starts_with('/');
        let path = if opaque {
            String::new()
        } else {
            percent_decode(path.as_str())
        };

        Ok(Self {
            scheme: scheme.map(str::to_string),
            authority: authority.filter(|a| !a.is_empty()).map(percent_decode),
            path,
            query: caps.get(4).map(|m| m.as_str().to_string()),
            fragment: caps.get(5).map(|m| m.as_str().to_string()),
        })
    }
}

/// 使用できない文字と壊れたパーセントエンコーディングを検出する
///
/// 非 ASCII 文字は制御文字・空白でなければ許可する。
fn validate_characters(raw: &str) -> Result<(), UriError> {
    let bytes = raw.as_bytes();
    for (index, character) in raw.char_indices() {
        if character == '%' {
            let escape = bytes.get(index + 1..index + 3);
            if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return Err(UriError::MalformedEscape { index });
            }
            continue;
        }

        let allowed = character.is_ascii_alphanumeric()
            || URI_PUNCTUATION.contains(character)
            || (!character.is_ascii() && !character.is_control() && !character.is_whitespace());
        if !allowed {
            return Err(UriError::IllegalCharacter { index, character });
        }
    }
    Ok(())
}

/// オーソリティの `host:port` 部分を検証する
fn validate_authority(authority: &str) -> Result<(), UriError> {
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_userinfo, host_port)| host_port);

    let port = if let Some(literal) = host_port.strip_prefix('[') {
        let Some((_address, rest)) = literal.split_once(']') else {
            return Err(UriError::InvalidAuthority(authority.to_string()));
        };
        match rest {
            "" => None,
            rest => Some(
                rest.strip_prefix(':')
                    .ok_or_else(|| UriError::InvalidAuthority(authority.to_string()))?,
            ),
        }
    } else {
        if host_port.contains(['[', ']']) || authority.contains(['[', ']']) {
            return Err(UriError::InvalidAuthority(authority.to_string()));
        }
        host_port.rsplit_once(':').map(|(_host, port)| port)
    };

    // java.net.URI はこの場合レジストリベースのオーソリティとして受け付けるが、
    // ここでは数字以外のポートを不正とする
    match port {
        Some(port) if !port.bytes().all(|b| b.is_ascii_digit()) => {
            Err(UriError::InvalidPort(port.to_string()))
        }
        _ => Ok(()),
    }
}

fn percent_decode(component: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(component.as_bytes())).into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("https://api.example.com:8443/gen", Some("https"), Some("api.example.com:8443"), "/gen")]
    #[case("ftp://host", Some("ftp"), Some("host"), "")]
    #[case("http://localhost:8080/", Some("http"), Some("localhost:8080"), "/")]
    #[case("//cdn.example.com/docs", None, Some("cdn.example.com"), "/docs")]
    #[case("/api/v2", None, None, "/api/v2")]
    #[case("file:///var/docs", Some("file"), None, "/var/docs")]
    #[case("http://[::1]:8080/x", Some("http"), Some("[::1]:8080"), "/x")]
    #[case("https://user@host/p?q=1#frag", Some("https"), Some("user@host"), "/p")]
    #[case("http://?q", Some("http"), None, "")]
    #[case("http://#top", Some("http"), None, "")]
    fn test_正しいuriを分解できる(
        #[case] raw: &str,
        #[case] scheme: Option<&str>,
        #[case] authority: Option<&str>,
        #[case] path: &str,
    ) {
        let uri: UriReference = raw.parse().unwrap();

        assert_eq!(uri.scheme(), scheme);
        assert_eq!(uri.authority(), authority);
        assert_eq!(uri.path(), path);
    }

    #[test]
    fn test_クエリとフラグメントを保持する() {
        let uri: UriReference = "https://host/p?q=1#frag".parse().unwrap();

        assert_eq!(uri.query(), Some("q=1"));
        assert_eq!(uri.fragment(), Some("frag"));
    }

    #[test]
    fn test_パスはパーセントデコードされる() {
        let uri: UriReference = "https://host/open%20api".parse().unwrap();

        assert_eq!(uri.path(), "/open api");
    }

    #[test]
    fn test_不透明uriのパスは空になる() {
        let uri: UriReference = "mailto:docs@example.com".parse().unwrap();

        assert_eq!(uri.scheme(), Some("mailto"));
        assert_eq!(uri.authority(), None);
        assert_eq!(uri.path(), "");
    }

    #[rstest]
    #[case("", UriError::Empty)]
    #[case("://bad uri", UriError::IllegalCharacter { index: 6, character: ' ' })]
    #[case(":nohost", UriError::ColonInRelativePath(":nohost".to_string()))]
    #[case("https://host/%zz", UriError::MalformedEscape { index: 13 })]
    #[case("https://host/%2", UriError::MalformedEscape { index: 13 })]
    #[case("1http://host", UriError::InvalidScheme("1http".to_string()))]
    #[case("https:", UriError::MissingSchemeSpecificPart("https".to_string()))]
    #[case("https://host:abc/", UriError::InvalidPort("abc".to_string()))]
    #[case("http://", UriError::MissingAuthority { index: 7 })]
    #[case("//", UriError::MissingAuthority { index: 2 })]
    #[case("https://[::1/", UriError::InvalidAuthority("[::1".to_string()))]
    #[case("https://host/a[0]", UriError::IllegalCharacter { index: 14, character: '[' })]
    #[case("https://host/\"x\"", UriError::IllegalCharacter { index: 13, character: '"' })]
    fn test_不正なuriはエラーになる(#[case] raw: &str, #[case] expected: UriError) {
        let result = raw.parse::<UriReference>();

        assert_eq!(result, Err(expected));
    }
}
