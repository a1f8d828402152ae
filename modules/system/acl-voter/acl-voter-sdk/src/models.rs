//! ACL model consulted by voters.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};
use surrogate_security::{GrantedAuthority, Principal, SecurityContext};

/// Bit mask of operations on an ACL-protected object.
///
/// Deserialized through [`Permission::from_bits`], so bits above
/// [`Permission::ALL`] are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Permission(u32);

impl Permission {
    pub const NOTHING: Self = Self(0);
    pub const EXECUTE: Self = Self(0x01);
    pub const SUBSCRIBE: Self = Self(0x02);
    pub const CREATE: Self = Self(0x04);
    pub const UPDATE: Self = Self(0x08);
    pub const DELETE: Self = Self(0x10);
    pub const UPDATE_PERMS: Self = Self(0x20);
    pub const ADMINISTRATION: Self = Self(0x40);
    pub const ALL: Self = Self(0x7f);

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Permission {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Permission> for u32 {
    fn from(permission: Permission) -> Self {
        permission.bits()
    }
}

impl BitOr for Permission {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Permission {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// Who an ACL entry applies to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum AclRecipient {
    User(Principal),
    Role(GrantedAuthority),
}

impl AclRecipient {
    /// Whether this recipient names the session's principal or one of its authorities.
    #[must_use]
    pub fn matches(&self, ctx: &SecurityContext) -> bool {
        match self {
            Self::User(user) => user == ctx.principal(),
            Self::Role(role) => ctx.authorities().contains(role),
        }
    }
}

/// A single grant of operations to a recipient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclEntry {
    pub recipient: AclRecipient,
    pub permission: Permission,
}

impl AclEntry {
    #[must_use]
    pub fn user(name: impl Into<Principal>, permission: Permission) -> Self {
        Self {
            recipient: AclRecipient::User(name.into()),
            permission,
        }
    }

    #[must_use]
    pub fn role(name: impl Into<GrantedAuthority>, permission: Permission) -> Self {
        Self {
            recipient: AclRecipient::Role(name.into()),
            permission,
        }
    }
}

/// An object protected by an access-control list.
pub trait AclHolder: Send + Sync {
    fn access_control_list(&self) -> &[AclEntry];
}

impl AclHolder for Vec<AclEntry> {
    fn access_control_list(&self) -> &[AclEntry] {
        self
    }
}
