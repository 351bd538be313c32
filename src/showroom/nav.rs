use crate::model::ItemId;
use std::fmt;
use std::str::FromStr;

/// A navigable location: path plus raw query string (without the `?`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    path: String,
    query: String,
}

impl Location {
    pub fn new(path: &str, query: &str) -> Self {
        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        Self {
            path,
            query: query.trim_start_matches('?').to_string(),
        }
    }

    /// Parses `"/products?productId=5#top"`. The fragment is dropped.
    pub fn parse(input: &str) -> Self {
        let input = input.split('#').next().unwrap_or_default();
        match input.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(input, ""),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The query string as it appears in a URL: `"?a=1"`, or `""` when empty.
    pub fn search(&self) -> String {
        if self.query.is_empty() {
            String::new()
        } else {
            format!("?{}", self.query)
        }
    }

    /// First value of a query parameter, decoded. Empty values count as absent.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query
            .split('&')
            .filter_map(|pair| match pair.split_once('=') {
                Some((k, v)) => Some((k, v)),
                None if !pair.is_empty() => Some((pair, "")),
                None => None,
            })
            .find(|(k, _)| decode_component(k) == name)
            .map(|(_, v)| decode_component(v))
            .filter(|v| !v.is_empty())
    }

    pub fn deep_link(&self, param: &str) -> Option<ItemId> {
        self.query_param(param).map(ItemId::from)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.path, self.search())
    }
}

impl FromStr for Location {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Builds a `path?k=v&...` link, form-encoding the values and skipping
/// empty ones. With nothing to encode the bare path is returned.
pub fn link_with_query(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter_map(|(k, v)| match v {
            Some(v) if !v.is_empty() => {
                Some(format!("{}={}", encode_component(k), encode_component(v)))
            }
            _ => None,
        })
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

/// `application/x-www-form-urlencoded` encoding of one component.
pub fn encode_component(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}

/// Reverses [`encode_component`]. Malformed escapes are kept literally.
pub fn decode_component(s: &str) -> String {
    let spaced = s.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
