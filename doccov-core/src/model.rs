//! Entity model handed over by the documentation parser.
//!
//! The parser emits one JSON document per project. Member lists are optional on the wire
//! because partially parsed entities omit them; [`RawEntity::classify`] turns that into an
//! explicit coverable/malformed decision before any counting happens.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Result;

/// Kind of documented declaration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Angular-style component.
    Component,
    /// Directive.
    Directive,
    /// Plain class.
    Class,
    /// Injectable service.
    Injectable,
    /// Interface declaration.
    Interface,
    /// Pipe.
    Pipe,
}

impl EntityKind {
    /// Name used for the `type` column of coverage records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Directive => "directive",
            Self::Class => "class",
            Self::Injectable => "injectable",
            Self::Interface => "interface",
            Self::Pipe => "pipe",
        }
    }

    /// Path segment page renderers use when linking to the entity.
    pub fn link_type(self) -> &'static str {
        match self {
            Self::Class => "classe",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility modifier of a member.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Visibility {
    /// No modifier or `public`.
    #[default]
    Public,
    /// `protected` members.
    Protected,
    /// `private` members; never part of coverage.
    Private,
    /// Members tagged `@internal`.
    Internal,
}

impl Visibility {
    /// Whether the member is excluded from coverage entirely.
    pub fn is_private(self) -> bool {
        self == Self::Private
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "" | "public" => Ok(Self::Public),
            "protected" => Ok(Self::Protected),
            "private" => Ok(Self::Private),
            "internal" => Ok(Self::Internal),
            other => Err(format!("unknown visibility: {other}")),
        }
    }
}

impl From<Option<String>> for Visibility {
    fn from(value: Option<String>) -> Self {
        let Some(value) = value else {
            return Self::Public;
        };
        value.parse().unwrap_or_else(|_| {
            debug!("unknown visibility {value:?}, counting member as public");
            Self::Public
        })
    }
}

/// A property, method, binding, listener, input or output of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Member {
    /// Member identifier.
    #[serde(default)]
    pub name: Option<String>,
    /// Documentation attached to the member.
    #[serde(default)]
    pub description: Option<String>,
    /// Visibility modifier.
    #[serde(default)]
    pub visibility: Visibility,
}

/// Constructor declaration of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Constructor {
    /// Documentation attached to the constructor.
    #[serde(default)]
    pub description: Option<String>,
}

/// An entity as emitted by the parser, before shape validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntity {
    /// Source file path.
    #[serde(default)]
    pub file: String,
    /// Identifier.
    #[serde(default)]
    pub name: String,
    /// Top-level documentation.
    #[serde(default)]
    pub description: Option<String>,
    /// Constructor, when one is declared.
    #[serde(default, alias = "constructor")]
    pub constructor_obj: Option<Constructor>,
    /// Component/directive properties.
    #[serde(default)]
    pub properties_class: Option<Vec<Member>>,
    /// Component/directive methods.
    #[serde(default)]
    pub methods_class: Option<Vec<Member>>,
    /// Component/directive host bindings.
    #[serde(default)]
    pub host_bindings: Option<Vec<Member>>,
    /// Component/directive host listeners.
    #[serde(default)]
    pub host_listeners: Option<Vec<Member>>,
    /// Component/directive inputs.
    #[serde(default)]
    pub inputs_class: Option<Vec<Member>>,
    /// Component/directive outputs.
    #[serde(default)]
    pub outputs_class: Option<Vec<Member>>,
    /// Class/injectable/interface properties.
    #[serde(default)]
    pub properties: Option<Vec<Member>>,
    /// Class/injectable/interface methods.
    #[serde(default)]
    pub methods: Option<Vec<Member>>,
}

/// Outcome of validating a raw entity against its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<'a> {
    /// Every member list the kind requires is present.
    Coverable(CoverableEntity<'a>),
    /// At least one required member list is missing.
    Malformed,
}

/// An entity whose member lists are known to be complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverableEntity<'a> {
    /// Kind of the entity.
    pub kind: EntityKind,
    /// Underlying parser output.
    pub entity: &'a RawEntity,
    /// Member lists that count toward coverage for this kind.
    pub member_lists: Vec<&'a [Member]>,
}

impl RawEntity {
    /// Check that the member lists required by `kind` are present.
    pub fn classify(&self, kind: EntityKind) -> Shape<'_> {
        let required: Vec<&Option<Vec<Member>>> = match kind {
            EntityKind::Component | EntityKind::Directive => vec![
                &self.properties_class,
                &self.methods_class,
                &self.host_bindings,
                &self.host_listeners,
                &self.inputs_class,
                &self.outputs_class,
            ],
            EntityKind::Class | EntityKind::Injectable | EntityKind::Interface => {
                vec![&self.properties, &self.methods]
            }
            EntityKind::Pipe => Vec::new(),
        };

        let member_lists: Option<Vec<&[Member]>> =
            required.into_iter().map(|list| list.as_deref()).collect();
        match member_lists {
            Some(member_lists) => Shape::Coverable(CoverableEntity {
                kind,
                entity: self,
                member_lists,
            }),
            None => Shape::Malformed,
        }
    }
}

/// Every entity collection of a parsed project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectModel {
    /// Components.
    #[serde(default)]
    pub components: Vec<RawEntity>,
    /// Directives.
    #[serde(default)]
    pub directives: Vec<RawEntity>,
    /// Classes.
    #[serde(default)]
    pub classes: Vec<RawEntity>,
    /// Injectable services.
    #[serde(default)]
    pub injectables: Vec<RawEntity>,
    /// Interfaces.
    #[serde(default)]
    pub interfaces: Vec<RawEntity>,
    /// Pipes.
    #[serde(default)]
    pub pipes: Vec<RawEntity>,
}

impl ProjectModel {
    /// Parse a project model from its JSON representation.
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Iterate over every entity, tagged with the collection it came from.
    ///
    /// Collections are visited in a fixed order: components, directives, classes,
    /// injectables, interfaces, pipes.
    pub fn entities(&self) -> impl Iterator<Item = (EntityKind, &RawEntity)> {
        [
            (EntityKind::Component, &self.components),
            (EntityKind::Directive, &self.directives),
            (EntityKind::Class, &self.classes),
            (EntityKind::Injectable, &self.injectables),
            (EntityKind::Interface, &self.interfaces),
            (EntityKind::Pipe, &self.pipes),
        ]
        .into_iter()
        .flat_map(|(kind, list)| list.iter().map(move |entity| (kind, entity)))
    }

    /// Total number of entities across all collections, malformed ones included.
    pub fn len(&self) -> usize {
        self.entities().count()
    }

    /// Whether the model contains no entities at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
