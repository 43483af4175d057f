//! Aspects - named, versioned fragments of an entity's metadata
//!
//! The retrieval service hands aspects back as enveloped JSON values keyed by
//! aspect name. Typed aspects implement [`Aspect`] so callers can pull them
//! out of an [`EntityResponse`] by type.

use crate::error::Result;
use crate::urn::Urn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const GROUP_MEMBERSHIP_ASPECT_NAME: &str = "groupMembership";
pub const NATIVE_GROUP_MEMBERSHIP_ASPECT_NAME: &str = "nativeGroupMembership";

/// A typed aspect with a fixed name
pub trait Aspect: Serialize + DeserializeOwned {
    const NAME: &'static str;
}

/// Groups a principal belongs to, as synced from an external directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembership {
    #[serde(default)]
    pub groups: Vec<Urn>,
}

impl Aspect for GroupMembership {
    const NAME: &'static str = GROUP_MEMBERSHIP_ASPECT_NAME;
}

/// Groups a principal belongs to that were created natively in the platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeGroupMembership {
    #[serde(default)]
    pub native_groups: Vec<Urn>,
}

impl Aspect for NativeGroupMembership {
    const NAME: &'static str = NATIVE_GROUP_MEMBERSHIP_ASPECT_NAME;
}

/// An aspect value as returned by the retrieval service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopedAspect {
    pub name: String,
    pub value: serde_json::Value,
    #[serde(default)]
    pub version: i64,
}

impl EnvelopedAspect {
    /// Envelope a raw JSON value under the given aspect name
    pub fn new(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            value,
            version: 0,
        }
    }

    /// Envelope a typed aspect
    pub fn from_aspect<A: Aspect>(aspect: &A) -> Result<Self> {
        Ok(Self::new(A::NAME, serde_json::to_value(aspect)?))
    }

    /// Deserialize the enveloped value into its typed aspect
    pub fn to_aspect<A: Aspect>(&self) -> Result<A> {
        Ok(serde_json::from_value(self.value.clone())?)
    }
}

/// The retrieval service's answer for one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityResponse {
    pub entity_name: String,
    pub urn: Urn,
    #[serde(default)]
    pub aspects: HashMap<String, EnvelopedAspect>,
}

impl EntityResponse {
    pub fn new(entity_name: impl Into<String>, urn: Urn) -> Self {
        Self {
            entity_name: entity_name.into(),
            urn,
            aspects: HashMap::new(),
        }
    }

    pub fn with_aspect(mut self, aspect: EnvelopedAspect) -> Self {
        self.aspects.insert(aspect.name.clone(), aspect);
        self
    }

    /// Typed aspect `A`, or `None` when the response does not carry it
    pub fn aspect<A: Aspect>(&self) -> Result<Option<A>> {
        self.aspects
            .get(A::NAME)
            .map(|enveloped| enveloped.to_aspect::<A>())
            .transpose()
    }
}
