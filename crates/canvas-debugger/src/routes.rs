//! Editor route patterns.
//!
//! Patterns are `/`-separated segments; `:name` captures one non-empty path
//! segment. Matching is case-insensitive and accepts trailing segments after
//! the pattern, so `/a/:id` matches `/a/1`, `/a/1/` and `/a/1/b`.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;

use crate::error::RouteError;

/// Datasource editor route; the debugger icon is hidden there.
pub const DATASOURCE_EDITOR_ROUTE: &str =
    "/applications/:applicationId/pages/:pageId/edit/datasource/:datasourceId";

#[derive(Debug, Clone)]
pub struct RoutePattern {
    pattern: String,
    regex: Regex,
    params: Vec<String>,
}

impl RoutePattern {
    pub fn new(pattern: &str) -> Result<Self, RouteError> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(RouteError::NotAbsolute {
                pattern: pattern.to_string(),
            });
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut source = String::from("(?i)^");
        let mut params = Vec::new();
        if !rest.is_empty() {
            for segment in rest.split('/') {
                if segment.is_empty() {
                    return Err(RouteError::EmptySegment {
                        pattern: pattern.to_string(),
                    });
                }
                source.push('/');
                if let Some(name) = segment.strip_prefix(':') {
                    if !is_param_name(name) {
                        return Err(RouteError::InvalidParam {
                            pattern: pattern.to_string(),
                            name: name.to_string(),
                        });
                    }
                    source.push_str(&format!("(?P<{name}>[^/]+)"));
                    params.push(name.to_string());
                } else {
                    source.push_str(&regex::escape(segment));
                }
            }
        }
        source.push_str("(?:/.*)?$");

        let regex = Regex::new(&source).map_err(|source| RouteError::Regex {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            params,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(strip_query(path))
    }

    /// Captured parameters, or `None` when `path` does not match.
    pub fn params(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let captures = self.regex.captures(strip_query(path))?;
        Some(
            self.params
                .iter()
                .filter_map(|name| {
                    captures
                        .name(name)
                        .map(|value| (name.clone(), value.as_str().to_string()))
                })
                .collect(),
        )
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Whether the debugger icon is hidden at `path`.
pub fn hide_debugger_icon(datasource_route: &RoutePattern, path: &str) -> bool {
    datasource_route.matches(path)
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

fn is_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
