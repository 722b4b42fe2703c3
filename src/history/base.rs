//! Application base path.

/// The path prefix the application is served under.
///
/// Stored without a trailing slash; the root base is `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    prefix: String,
}

impl Base {
    /// Normalize `base`: a leading `/` is added, trailing slashes dropped.
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim_matches('/');
        let prefix = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}")
        };
        Self { prefix }
    }

    pub fn root() -> Self {
        Self::new("/")
    }

    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    pub fn is_root(&self) -> bool {
        self.prefix == "/"
    }

    /// Remove the base from a location path.
    ///
    /// Returns `None` when the path lies outside the base.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.is_root() {
            return Some(path);
        }
        let rest = path.strip_prefix(self.prefix.as_str())?;
        match rest {
            "" => Some("/"),
            r if r.starts_with('/') => Some(r),
            _ => None,
        }
    }

    /// Prefix an application path with the base.
    pub fn href(&self, path: &str) -> String {
        if self.is_root() {
            path.to_string()
        } else {
            format!("{}{}", self.prefix, path)
        }
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(Base::new("").as_str(), "/");
        assert_eq!(Base::new("/").as_str(), "/");
        assert_eq!(Base::new("/app/").as_str(), "/app");
        assert_eq!(Base::new("app").as_str(), "/app");
    }

    #[test]
    fn test_strip() {
        let base = Base::new("/app/");
        assert_eq!(base.strip("/app"), Some("/"));
        assert_eq!(base.strip("/app/"), Some("/"));
        assert_eq!(base.strip("/app/project/1"), Some("/project/1"));
        assert_eq!(base.strip("/application"), None);
        assert_eq!(base.strip("/other"), None);
        assert_eq!(Base::root().strip("/config"), Some("/config"));
    }

    #[test]
    fn test_href() {
        let base = Base::new("/app");
        assert_eq!(base.href("/"), "/app/");
        assert_eq!(base.href("/project/1"), "/app/project/1");
        assert_eq!(Base::root().href("/config"), "/config");
    }
}
