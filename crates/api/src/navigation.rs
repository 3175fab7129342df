use crate::error::ApiResult;
use crate::models::{DeclarationElement, NamingConvention};

/// What the user asked to navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Exact, case-sensitive match on the simple name.
    Name(String),
    /// Case-insensitive match of the full path against `path` or `path + name`.
    Qualified { path: String, name: String },
}

impl Query {
    /// Build a query from an extracted identifier, using the qualified shape
    /// when the text carries a container path.
    pub fn from_text(text: &str, convention: &dyn NamingConvention) -> Self {
        match convention.split_qualified(text) {
            Some((path, name)) => Query::Qualified {
                path: path.to_string(),
                name: name.to_string(),
            },
            None => Query::Name(text.to_string()),
        }
    }

    /// Blank targets never match anything.
    pub fn is_blank(&self) -> bool {
        match self {
            Query::Name(name) => name.trim().is_empty(),
            Query::Qualified { path, name } => path.trim().is_empty() && name.trim().is_empty(),
        }
    }
}

/// Resolution of user queries to a single declaration.
///
/// Ambiguity never reaches the caller: a lookup yields one element or nothing,
/// and nothing means the host should run its own navigation.
pub trait NavigationService: Send + Sync {
    /// Resolve `query` against the current index.
    ///
    /// # Returns
    /// * `Ok(Some(element))` - the most plausible declaration
    /// * `Ok(None)` - no match, including blank input
    fn resolve(&self, query: &Query) -> ApiResult<Option<DeclarationElement>>;

    /// Number of elements currently known to the index.
    fn indexed_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DotPathConvention;

    #[test]
    fn dotted_text_becomes_qualified() {
        let query = Query::from_text("NsA.Foo", &DotPathConvention);
        assert_eq!(
            query,
            Query::Qualified {
                path: "NsA.".to_string(),
                name: "Foo".to_string()
            }
        );
    }

    #[test]
    fn blank_detection() {
        assert!(Query::Name("  ".to_string()).is_blank());
        assert!(!Query::Name("Foo".to_string()).is_blank());
        assert!(
            !Query::Qualified {
                path: "NsA.Foo".to_string(),
                name: String::new()
            }
            .is_blank()
        );
    }
}
