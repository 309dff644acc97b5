//! Mapping numeric user and group ids to display names

use users::{Groups, Users, UsersCache};

/// Resolves uids and gids to the names printed next to each entry.
pub trait IdentityResolver {
    fn user_name(&self, uid: u32) -> String;
    fn group_name(&self, gid: u32) -> String;
}

/// Resolves names from the system user and group databases.
///
/// Lookups are cached for the lifetime of the resolver, so a large tree owned
/// by one user costs a single passwd lookup. Ids with no database entry are
/// printed numerically.
pub struct SystemIdentities {
    cache: UsersCache,
}

impl SystemIdentities {
    pub fn new() -> Self {
        Self {
            cache: UsersCache::new(),
        }
    }
}

impl Default for SystemIdentities {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityResolver for SystemIdentities {
    fn user_name(&self, uid: u32) -> String {
        self.cache
            .get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| uid.to_string())
    }

    fn group_name(&self, gid: u32) -> String {
        self.cache
            .get_group_by_gid(gid)
            .map(|g| g.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| gid.to_string())
    }
}

/// Prints ids as numbers (`-n`).
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericIdentities;

impl IdentityResolver for NumericIdentities {
    fn user_name(&self, uid: u32) -> String {
        uid.to_string()
    }

    fn group_name(&self, gid: u32) -> String {
        gid.to_string()
    }
}
