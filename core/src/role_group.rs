//! Role groups: ordered, nestable groupings of role references.

use crate::Cardinality;
use std::fmt;

/// One element of a role group: a role reference by name, or a nested group.
///
/// Leaf references are stored as plain text labels, not live object
/// references, so the group tree stays decoupled from the model graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A reference to a role type, by name.
    Role(String),
    /// A nested role group.
    Group(RoleGroup),
}

impl From<&str> for Element {
    fn from(name: &str) -> Self {
        Element::Role(name.to_string())
    }
}

impl From<String> for Element {
    fn from(name: String) -> Self {
        Element::Role(name)
    }
}

impl From<RoleGroup> for Element {
    fn from(group: RoleGroup) -> Self {
        Element::Group(group)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Role(name) => f.write_str(name),
            Element::Group(group) => group.fmt(f),
        }
    }
}

/// An ordered collection of role references and nested groups, with a
/// cardinality bounding how many direct elements may be active at once.
///
/// A group exclusively owns its nested groups (a tree, never a graph).
/// Immutable after construction; an empty element list is a legal
/// degenerate group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGroup {
    cardinality: Cardinality,
    elements: Vec<Element>,
}

impl RoleGroup {
    /// Create a role group from a cardinality and its direct elements.
    pub fn new(cardinality: Cardinality, elements: Vec<Element>) -> Self {
        Self {
            cardinality,
            elements,
        }
    }

    /// Create a group holding the given role names, by convenience.
    pub fn of_roles<I, S>(cardinality: Cardinality, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            cardinality,
            names.into_iter().map(|n| Element::Role(n.into())).collect(),
        )
    }

    /// The group's cardinality.
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Direct elements, in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// All leaf role names in the subtree, depth-first, document order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        let mut names = Vec::new();
        self.collect_roles(&mut names);
        names.into_iter()
    }

    fn collect_roles<'a>(&'a self, out: &mut Vec<&'a str>) {
        for element in &self.elements {
            match element {
                Element::Role(name) => out.push(name),
                Element::Group(group) => group.collect_roles(out),
            }
        }
    }
}

impl fmt::Display for RoleGroup {
    /// The canonical formal-notation rendering:
    /// `RoleGroup([e1,e2,...],lower,upper)` with `inf` for an unbounded upper.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoleGroup([")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "],{}", self.cardinality.lower())?;
        match self.cardinality.upper() {
            Some(upper) => write!(f, ",{})", upper),
            None => write!(f, ",inf)"),
        }
    }
}
