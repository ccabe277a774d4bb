//! Daily usage allowance shown next to the signed in user.

use super::session::Session;

/// Allowance assumed for non-admin users with no limit on record
pub const DEFAULT_DAILY_LIMIT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Exhausted,
    Low,
    Ok,
}

impl UsageLevel {
    pub fn from_remaining(remaining: u32) -> Self {
        match remaining {
            0 => UsageLevel::Exhausted,
            1..=2 => UsageLevel::Low,
            _ => UsageLevel::Ok,
        }
    }
}

/// Remaining uses for today. `None` when signed out or unlimited
/// (admins). The backend has no counter endpoint so this reports the
/// user's daily limit.
pub fn remaining_usage(session: &Session) -> Option<u32> {
    let user = session.user()?;
    if !session.is_authenticated() || user.is_admin() {
        return None;
    }
    Some(match user.daily_limit {
        Some(0) | None => DEFAULT_DAILY_LIMIT,
        Some(limit) => limit,
    })
}
