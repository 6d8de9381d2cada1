//! Upstream resource names and URL construction.

use std::fmt;

/// Default upstream API root.
pub const API_URL: &str = "https://jsonplaceholder.typicode.com";

/// One of the six upstream entity kinds, identified by its path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Posts,
    Comments,
    Albums,
    Photos,
    Todos,
    Users,
}

impl Resource {
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Posts => "posts",
            Resource::Comments => "comments",
            Resource::Albums => "albums",
            Resource::Photos => "photos",
            Resource::Todos => "todos",
            Resource::Users => "users",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join `base` and each non-empty segment with `/`, in order. Segments are
/// opaque and are not escaped.
pub fn build_url(base: &str, segments: &[&dyn fmt::Display]) -> String {
    let mut url = base.to_string();
    for segment in segments {
        let segment = segment.to_string();
        if segment.is_empty() {
            continue;
        }
        url.push('/');
        url.push_str(&segment);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://foo.bar";

    const ALL: [Resource; 6] = [
        Resource::Posts,
        Resource::Comments,
        Resource::Albums,
        Resource::Photos,
        Resource::Todos,
        Resource::Users,
    ];

    #[test]
    fn no_segments_yields_base() {
        assert_eq!(build_url(BASE, &[]), "https://foo.bar");
    }

    #[test]
    fn single_segment() {
        assert_eq!(build_url(BASE, &[&"foo"]), "https://foo.bar/foo");
    }

    #[test]
    fn mixed_segments_keep_argument_order() {
        assert_eq!(
            build_url(BASE, &[&"foo", &"bar", &1]),
            "https://foo.bar/foo/bar/1"
        );
        assert_eq!(
            build_url(BASE, &[&Resource::Users, &7u64, &Resource::Todos]),
            "https://foo.bar/users/7/todos"
        );
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert_eq!(build_url(BASE, &[&"", &"posts", &""]), "https://foo.bar/posts");
    }

    #[test]
    fn resource_names_match_upstream_paths() {
        let names: Vec<_> = ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(
            names,
            ["posts", "comments", "albums", "photos", "todos", "users"]
        );
    }
}
