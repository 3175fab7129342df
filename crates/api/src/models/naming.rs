use std::fmt::Debug;

/// Language-specific rules for splitting a qualified identifier into a
/// container path and a simple name.
pub trait NamingConvention: Send + Sync + Debug {
    /// The primary separator (e.g., "." for C#, "::" for C++).
    fn separator(&self) -> &str;

    /// Split `text` at its last separator.
    ///
    /// The returned path keeps the trailing separator so that
    /// `path + name` reproduces `text`. Returns `None` for unqualified text.
    fn split_qualified<'a>(&self, text: &'a str) -> Option<(&'a str, &'a str)> {
        let sep = self.separator();
        let idx = text.rfind(sep)?;
        let (path, name) = text.split_at(idx + sep.len());
        if path.len() == sep.len() || name.is_empty() {
            return None;
        }
        Some((path, name))
    }
}

/// Dotted paths, as used by C#, VB and Java style namespaces.
#[derive(Debug, Default)]
pub struct DotPathConvention;

impl NamingConvention for DotPathConvention {
    fn separator(&self) -> &str {
        "."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_last_separator() {
        let convention = DotPathConvention;
        assert_eq!(
            convention.split_qualified("NsA.Inner.Foo"),
            Some(("NsA.Inner.", "Foo"))
        );
    }

    #[test]
    fn unqualified_or_dangling_text_is_not_split() {
        let convention = DotPathConvention;
        assert_eq!(convention.split_qualified("Foo"), None);
        assert_eq!(convention.split_qualified("NsA."), None);
        assert_eq!(convention.split_qualified(".Foo"), None);
    }
}
