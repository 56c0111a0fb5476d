use crate::types::{Update, User};

/// `getMe`: basic information about the bot. Takes no arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GetMe;

remote_call! {
    GetMe => "getMe" -> User;
}

/// `getUpdates`: long-poll for incoming updates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetUpdates {
    /// First update to return; confirms every earlier one.
    pub offset:          Option<i64>,
    /// 1..=100, server default 100.
    pub limit:           Option<u32>,
    /// Long-poll timeout in seconds.
    pub timeout:         Option<u32>,
    pub allowed_updates: Option<Vec<String>>,
}

fn validate_get_updates(bag: &GetUpdates) -> Result<(), crate::ArgumentError> {
    match bag.limit {
        Some(n) if !(1..=100).contains(&n) => {
            Err(crate::ArgumentError::new("limit", format!("{n} is outside 1..=100")))
        }
        _ => Ok(()),
    }
}

remote_call! {
    GetUpdates => "getUpdates" -> Vec<Update>;
    "offset"          => offset:          Scalar,
    "limit"           => limit:           Scalar,
    "timeout"         => timeout:         Scalar,
    "allowed_updates" => allowed_updates: Composite,
    validate: validate_get_updates;
}

impl GetUpdates {
    /// Long-poll starting at `offset`.
    pub fn poll(offset: i64, timeout: u32) -> Self {
        Self { offset: Some(offset), timeout: Some(timeout), ..Default::default() }
    }
}
