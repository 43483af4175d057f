//! GroupMembershipFieldResolverProvider - groups the resource belongs to
//!
//! Both the `groupMembership` and `nativeGroupMembership` aspects are
//! requested in a single retrieval call and their group URNs are unioned.
//!
//! Resolution fails open to an empty set: an unknown entity, missing
//! aspects, a malformed URN or payload, and a failed retrieval all resolve to
//! "no groups". A backend outage therefore looks the same as a principal in no
//! group, so policies must not grant access on the *absence* of a group.

use std::collections::HashSet;
use std::sync::Arc;

use entity::EntityClient;
use shared::{
    Authentication, EntityFieldType, EntitySpec, GroupMembership, NativeGroupMembership, Result,
    Urn, GROUP_MEMBERSHIP_ASPECT_NAME, NATIVE_GROUP_MEMBERSHIP_ASPECT_NAME,
};
use tracing::{debug, error};

use crate::field_resolver::{FieldResolver, FieldValues};
use crate::provider::FieldResolverProvider;

/// Resolves [`EntityFieldType::GroupMembership`]
pub struct GroupMembershipFieldResolverProvider {
    entity_client: Arc<dyn EntityClient>,
    system_authentication: Arc<Authentication>,
}

impl GroupMembershipFieldResolverProvider {
    pub fn new(
        entity_client: Arc<dyn EntityClient>,
        system_authentication: Arc<Authentication>,
    ) -> Self {
        Self {
            entity_client,
            system_authentication,
        }
    }

    /// The exact aspect set requested on every retrieval
    pub fn aspect_names() -> HashSet<String> {
        [GROUP_MEMBERSHIP_ASPECT_NAME, NATIVE_GROUP_MEMBERSHIP_ASPECT_NAME]
            .into_iter()
            .map(String::from)
            .collect()
    }

    async fn fetch_group_membership(
        entity_client: &dyn EntityClient,
        authentication: &Authentication,
        entity_spec: &EntitySpec,
    ) -> Result<FieldValues> {
        let urn = Urn::parse(entity_spec.entity())?;
        let response = entity_client
            .get_v2(
                entity_spec.entity_type(),
                &urn,
                &Self::aspect_names(),
                authentication,
            )
            .await?;

        let Some(response) = response else {
            return Ok(FieldValues::empty());
        };

        let mut groups = HashSet::new();
        if let Some(membership) = response.aspect::<GroupMembership>()? {
            groups.extend(membership.groups.into_iter().map(String::from));
        }
        if let Some(membership) = response.aspect::<NativeGroupMembership>()? {
            groups.extend(membership.native_groups.into_iter().map(String::from));
        }

        Ok(FieldValues::from(groups))
    }
}

impl FieldResolverProvider for GroupMembershipFieldResolverProvider {
    fn field_types(&self) -> Vec<EntityFieldType> {
        vec![EntityFieldType::GroupMembership]
    }

    fn get_field_resolver(&self, entity_spec: &EntitySpec) -> FieldResolver {
        let entity_client = Arc::clone(&self.entity_client);
        let authentication = Arc::clone(&self.system_authentication);
        let entity_spec = entity_spec.clone();

        FieldResolver::spawn(async move {
            match Self::fetch_group_membership(entity_client.as_ref(), &authentication, &entity_spec)
                .await
            {
                Ok(groups) => {
                    debug!(resource = %entity_spec, groups = groups.len(), "Resolved group membership");
                    groups
                }
                Err(err) => {
                    error!(
                        resource = %entity_spec,
                        error = %err,
                        "Error while retrieving group membership, resolving to no groups"
                    );
                    FieldValues::empty()
                }
            }
        })
    }
}
