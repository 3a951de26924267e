//! Values a catalog alias resolves to.

use std::fmt;

use serde::Serialize;

use crate::Category;

/// A version alias resolved to its required version string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionConstraint {
    required_version: String,
}

impl VersionConstraint {
    pub fn new(required_version: impl Into<String>) -> Self {
        Self {
            required_version: required_version.into(),
        }
    }

    /// The version consumers must use.
    pub fn required_version(&self) -> &str {
        &self.required_version
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.required_version)
    }
}

/// A library coordinate: `group:name`, optionally pinned to a version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryDependency {
    group: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

impl LibraryDependency {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: None,
        }
    }

    /// Parse a `group:name` module notation.
    ///
    /// Returns `None` unless there are exactly two non-empty parts.
    pub fn from_module(module: &str) -> Option<Self> {
        let (group, name) = module.split_once(':')?;
        if group.is_empty() || name.is_empty() || name.contains(':') {
            return None;
        }
        Some(Self::new(group, name))
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The `group:name` module notation.
    pub fn module(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

impl fmt::Display for LibraryDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}:{}", self.group, self.name, version),
            None => write!(f, "{}:{}", self.group, self.name),
        }
    }
}

/// An ordered group of libraries declared under one alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BundleDependency {
    libraries: Vec<LibraryDependency>,
}

impl BundleDependency {
    pub fn new(libraries: Vec<LibraryDependency>) -> Self {
        Self { libraries }
    }

    pub fn libraries(&self) -> &[LibraryDependency] {
        &self.libraries
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

/// A plugin coordinate: its id, optionally pinned to a version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginDependency {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

impl PluginDependency {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl fmt::Display for PluginDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}", self.id, version),
            None => f.write_str(&self.id),
        }
    }
}

/// What an alias resolves to, tagged by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", content = "value", rename_all = "lowercase")]
pub enum ArtifactRef {
    Version(VersionConstraint),
    Library(LibraryDependency),
    Bundle(BundleDependency),
    Plugin(PluginDependency),
}

impl ArtifactRef {
    /// The category this reference belongs to.
    pub fn category(&self) -> Category {
        match self {
            ArtifactRef::Version(_) => Category::Version,
            ArtifactRef::Library(_) => Category::Library,
            ArtifactRef::Bundle(_) => Category::Bundle,
            ArtifactRef::Plugin(_) => Category::Plugin,
        }
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactRef::Version(v) => fmt::Display::fmt(v, f),
            ArtifactRef::Library(l) => fmt::Display::fmt(l, f),
            ArtifactRef::Bundle(b) => {
                let members = b
                    .libraries()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>();
                write!(f, "[{}]", members.join(", "))
            }
            ArtifactRef::Plugin(p) => fmt::Display::fmt(p, f),
        }
    }
}
