use chrono::{DateTime, Utc};

use crate::error::{Result, StorageError};
use crate::models::Requester;
use crate::services::lock::is_open;

/// Facts a write is judged on
#[derive(Debug, Clone, Copy)]
pub struct WriteContext<'a> {
    pub requester: &'a Requester,
    /// Current owner of the targeted record, `None` when creating
    pub owner: Option<&'a str>,
    pub lock_at: DateTime<Utc>,
    pub now: DateTime<Utc>,
}

/// A single independent check applied to a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// The request carries a user identity
    Authenticated,
    /// The requester created the targeted record
    Owner,
    /// The lock instant has not passed
    Unlocked,
    /// The requester holds the administrator capability
    Administrator,
}

impl Policy {
    pub fn allows(self, ctx: &WriteContext<'_>) -> bool {
        match self {
            Self::Authenticated => ctx.requester.user_id.is_some(),
            Self::Owner => ctx
                .owner
                .is_none_or(|owner| ctx.requester.is_owner_of(owner)),
            Self::Unlocked => is_open(ctx.lock_at, ctx.now),
            Self::Administrator => ctx.requester.is_admin,
        }
    }

    fn denial(self, ctx: &WriteContext<'_>) -> StorageError {
        match self {
            Self::Authenticated => {
                StorageError::PermissionDenied("a user identity is required".to_string())
            }
            Self::Owner => {
                StorageError::PermissionDenied("only the owner may change this record".to_string())
            }
            Self::Unlocked => StorageError::Locked {
                lock_at: ctx.lock_at,
            },
            Self::Administrator => {
                StorageError::PermissionDenied("administrator capability required".to_string())
            }
        }
    }
}

pub const CREATE: &[Policy] = &[Policy::Authenticated, Policy::Unlocked];

/// Ownership precedes the lock: a foreign record is denied whatever its lock state
pub const MODIFY: &[Policy] = &[Policy::Authenticated, Policy::Owner, Policy::Unlocked];

pub const ADMINISTER: &[Policy] = &[Policy::Administrator];

/// Evaluate `policies` in order, failing with the reason of the first one that denies
pub fn authorize(policies: &[Policy], ctx: &WriteContext<'_>) -> Result<()> {
    match policies.iter().find(|policy| !policy.allows(ctx)) {
        Some(policy) => Err(policy.denial(ctx)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn lock_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 11, 19, 0, 0).unwrap()
    }

    fn ctx<'a>(
        requester: &'a Requester,
        owner: Option<&'a str>,
        now: DateTime<Utc>,
    ) -> WriteContext<'a> {
        WriteContext {
            requester,
            owner,
            lock_at: lock_at(),
            now,
        }
    }

    #[test]
    fn test_create_before_lock_is_allowed() {
        let alice = Requester::user("alice");
        let before = lock_at() - Duration::minutes(5);
        assert!(authorize(CREATE, &ctx(&alice, None, before)).is_ok());
    }

    #[test]
    fn test_create_after_lock_is_locked() {
        let alice = Requester::user("alice");
        let result = authorize(CREATE, &ctx(&alice, None, lock_at()));
        assert!(matches!(result, Err(StorageError::Locked { lock_at: l }) if l == lock_at()));
    }

    #[test]
    fn test_create_without_identity_is_denied() {
        let admin = Requester::admin();
        let before = lock_at() - Duration::minutes(5);
        assert!(matches!(
            authorize(CREATE, &ctx(&admin, None, before)),
            Err(StorageError::PermissionDenied(_))
        ));
    }

    #[test]
    fn test_owner_may_modify_before_lock() {
        let alice = Requester::user("alice");
        let before = lock_at() - Duration::hours(1);
        assert!(authorize(MODIFY, &ctx(&alice, Some("alice"), before)).is_ok());
    }

    #[test]
    fn test_owner_cannot_modify_after_lock() {
        let alice = Requester::user("alice");
        let after = lock_at() + Duration::hours(1);
        assert!(matches!(
            authorize(MODIFY, &ctx(&alice, Some("alice"), after)),
            Err(StorageError::Locked { .. })
        ));
    }

    #[test]
    fn test_other_user_is_denied_regardless_of_lock() {
        let bob = Requester::user("bob");
        let before = lock_at() - Duration::hours(1);
        let after = lock_at() + Duration::hours(1);

        for now in [before, after] {
            assert!(matches!(
                authorize(MODIFY, &ctx(&bob, Some("alice"), now)),
                Err(StorageError::PermissionDenied(_))
            ));
        }
    }

    #[test]
    fn test_administer_bypasses_lock() {
        let admin = Requester::admin();
        let after = lock_at() + Duration::days(3);
        assert!(authorize(ADMINISTER, &ctx(&admin, None, after)).is_ok());
    }

    #[test]
    fn test_administer_requires_capability() {
        let alice = Requester::user("alice");
        let before = lock_at() - Duration::days(3);
        assert!(matches!(
            authorize(ADMINISTER, &ctx(&alice, None, before)),
            Err(StorageError::PermissionDenied(_))
        ));
    }
}
