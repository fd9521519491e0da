//! Extension-keyed generator dispatch.

use crate::{
    DispatchError, FormalCromGenerator, Generator, OntologyGenerator, RsqlGenerator,
    ScrollCodeGenerator,
};

/// An explicit set of generators, keyed by extension tag.
///
/// Constructed once by the driver and passed into dispatch; there is no
/// process-wide generator table. Extensions are unique per registered
/// generator, so lookup is unambiguous.
pub struct GeneratorSet {
    generators: Vec<Box<dyn Generator>>,
}

impl GeneratorSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// The standard set: ontology, formal CROM, RSQL and SCROLL generators.
    pub fn standard() -> Self {
        let mut set = Self::new();
        set.register(Box::new(OntologyGenerator));
        set.register(Box::new(FormalCromGenerator));
        set.register(Box::new(RsqlGenerator));
        set.register(Box::new(ScrollCodeGenerator));
        set
    }

    /// Register a generator. A later registration with the same extension
    /// shadows nothing; `find` returns the first match.
    pub fn register(&mut self, generator: Box<dyn Generator>) {
        self.generators.push(generator);
    }

    /// Find the generator for an extension tag.
    ///
    /// `UnknownExtension` is a normal, reportable outcome carrying the known
    /// tags for the caller's diagnostic listing.
    pub fn find(&self, extension: &str) -> Result<&dyn Generator, DispatchError> {
        self.generators
            .iter()
            .find(|g| g.extension() == extension)
            .map(|g| g.as_ref())
            .ok_or_else(|| DispatchError::UnknownExtension {
                requested: extension.to_string(),
                known: self.extensions().collect(),
            })
    }

    /// Registered extension tags, in registration order.
    pub fn extensions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.generators.iter().map(|g| g.extension())
    }
}

impl Default for GeneratorSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_extensions() {
        let set = GeneratorSet::standard();
        let extensions: Vec<_> = set.extensions().collect();
        assert_eq!(extensions, vec!["owl", "formal", "rsql", "scroll"]);
    }

    #[test]
    fn test_find_by_extension() {
        let set = GeneratorSet::standard();
        assert_eq!(set.find("formal").unwrap().extension(), "formal");
        assert_eq!(set.find("owl").unwrap().extension(), "owl");
    }

    #[test]
    fn test_unknown_extension() {
        let set = GeneratorSet::standard();
        let err = set.find("xyz").unwrap_err();
        assert_eq!(
            err,
            DispatchError::UnknownExtension {
                requested: "xyz".to_string(),
                known: vec!["owl", "formal", "rsql", "scroll"],
            }
        );
        assert!(err.to_string().contains("owl, formal, rsql, scroll"));
    }
}
