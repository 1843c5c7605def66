//! Resolved dependency trees
//!
//! A [`Resolution`] is an arena of resolved components. Components are
//! interned by `(group, name)`, so a library reached through several paths is
//! stored once and child lists may point back at ancestors. Traversals must
//! therefore never assume the relation is a tree.

use std::collections::HashMap;
use std::fmt;

use super::types::Coordinate;

/// Index of a component inside its [`Resolution`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(usize);

#[derive(Debug, Clone)]
struct Component {
    coordinate: Coordinate,
    children: Vec<ComponentId>,
}

#[derive(Debug, Clone, Default)]
pub struct Resolution {
    components: Vec<Component>,
    index: HashMap<(String, String), ComponentId>,
    first_level: Vec<ComponentId>,
}

impl Resolution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a component, returning the existing id for a known
    /// `(group, name)`
    ///
    /// A version supplied later fills in a component first seen without one.
    pub fn component(&mut self, coordinate: Coordinate) -> ComponentId {
        let key = (coordinate.group.clone(), coordinate.name.clone());
        if let Some(&id) = self.index.get(&key) {
            let existing = &mut self.components[id.0];
            if existing.coordinate.version.is_none() {
                existing.coordinate.version = coordinate.version;
            }
            return id;
        }

        let id = ComponentId(self.components.len());
        self.components.push(Component {
            coordinate,
            children: Vec::new(),
        });
        self.index.insert(key, id);
        id
    }

    fn contains(&self, id: ComponentId) -> bool {
        id.0 < self.components.len()
    }

    /// Append `child` to the children of `parent`, ignoring repeats
    ///
    /// Ids not issued by this resolution are ignored.
    pub fn add_child(&mut self, parent: ComponentId, child: ComponentId) {
        if !self.contains(parent) || !self.contains(child) {
            return;
        }
        let children = &mut self.components[parent.0].children;
        if !children.contains(&child) {
            children.push(child);
        }
    }

    /// Mark a component as directly requested by the configuration
    ///
    /// Ids not issued by this resolution are ignored.
    pub fn add_first_level(&mut self, id: ComponentId) {
        if self.contains(id) && !self.first_level.contains(&id) {
            self.first_level.push(id);
        }
    }

    pub fn first_level(&self) -> impl Iterator<Item = ResolvedDependency<'_>> {
        self.first_level
            .iter()
            .map(move |&id| ResolvedDependency::new(self, id))
    }

    pub fn get(&self, id: ComponentId) -> Option<ResolvedDependency<'_>> {
        self.contains(id).then(|| ResolvedDependency::new(self, id))
    }

    pub fn find(&self, group: &str, name: &str) -> Option<ResolvedDependency<'_>> {
        self.index
            .get(&(group.to_string(), name.to_string()))
            .map(|&id| ResolvedDependency::new(self, id))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Borrowed view of one resolved component
#[derive(Clone, Copy)]
pub struct ResolvedDependency<'a> {
    resolution: &'a Resolution,
    id: ComponentId,
}

impl<'a> ResolvedDependency<'a> {
    fn new(resolution: &'a Resolution, id: ComponentId) -> Self {
        Self { resolution, id }
    }

    fn component(&self) -> &'a Component {
        &self.resolution.components[self.id.0]
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn coordinate(&self) -> &'a Coordinate {
        &self.component().coordinate
    }

    pub fn group(&self) -> &'a str {
        &self.component().coordinate.group
    }

    pub fn name(&self) -> &'a str {
        &self.component().coordinate.name
    }

    pub fn version(&self) -> Option<&'a str> {
        self.component().coordinate.version.as_deref()
    }

    /// Children in declaration order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = ResolvedDependency<'a>> + 'a {
        let resolution = self.resolution;
        self.component()
            .children
            .iter()
            .map(move |&id| ResolvedDependency::new(resolution, id))
    }
}

impl fmt::Debug for ResolvedDependency<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedDependency")
            .field("id", &self.id)
            .field("coordinate", self.coordinate())
            .finish()
    }
}

impl fmt::Display for ResolvedDependency<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coordinate())
    }
}
