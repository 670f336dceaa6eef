use indexmap::IndexMap;

use crate::model::{Friend, FriendId, Money};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("friend name is empty")]
    MissingName,
    #[error("friend avatar is empty")]
    MissingAvatar,
    #[error("friend {0} does not exist")]
    UnknownFriend(FriendId),
    #[error("friend id {0} is used more than once")]
    DuplicateId(FriendId),
    #[error("balance with friend {0} would overflow")]
    BalanceOverflow(FriendId),
}

/// In-memory friend list in insertion order.
///
/// Ids are unique and new friends start at a zero balance. After insertion a
/// balance only changes through [`FriendLedger::apply_settlement`].
#[derive(Debug, Clone)]
pub struct FriendLedger {
    friends: IndexMap<FriendId, Friend>,
    next_id: FriendId,
}

impl Default for FriendLedger {
    fn default() -> Self {
        Self {
            friends: IndexMap::new(),
            next_id: FriendId(1),
        }
    }
}

impl FriendLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_friends(friends: impl IntoIterator<Item = Friend>) -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        for friend in friends {
            validate_fields(friend.name(), friend.avatar())?;
            let id = friend.id();
            if ledger.friends.contains_key(&id) {
                return Err(LedgerError::DuplicateId(id));
            }
            if id >= ledger.next_id {
                ledger.next_id = id.next();
            }
            ledger.friends.insert(id, friend);
        }
        Ok(ledger)
    }

    pub fn add_friend(&mut self, name: &str, avatar: &str) -> Result<FriendId, LedgerError> {
        self.add_friend_with(name, |_| avatar.to_string())
    }

    /// Adds a friend whose avatar depends on the id it is assigned.
    ///
    /// `avatar_for` only runs once the name has been accepted; an empty result
    /// rejects the insertion.
    pub fn add_friend_with<F>(&mut self, name: &str, avatar_for: F) -> Result<FriendId, LedgerError>
    where
        F: FnOnce(FriendId) -> String,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::MissingName);
        }

        let id = self.next_id;
        let avatar = avatar_for(id);
        validate_fields(name, &avatar)?;

        self.friends
            .insert(id, Friend::new(id, name, avatar, Money::ZERO));
        self.next_id = id.next();

        tracing::info!(%id, name, "added friend");
        Ok(id)
    }

    /// Adds `delta` to the friend's balance and returns the new balance.
    ///
    /// On error no balance changes.
    pub fn apply_settlement(&mut self, id: FriendId, delta: Money) -> Result<Money, LedgerError> {
        let friend = self
            .friends
            .get_mut(&id)
            .ok_or(LedgerError::UnknownFriend(id))?;
        let previous = friend.balance();
        let balance = friend
            .credit(delta)
            .ok_or(LedgerError::BalanceOverflow(id))?;

        tracing::info!(%id, %previous, %delta, %balance, "applied settlement");
        Ok(balance)
    }

    pub fn get(&self, id: FriendId) -> Option<&Friend> {
        self.friends.get(&id)
    }

    pub fn contains(&self, id: FriendId) -> bool {
        self.friends.contains_key(&id)
    }

    /// First friend whose name matches, ignoring case (Unicode lowercase).
    pub fn find_by_name(&self, name: &str) -> Option<&Friend> {
        let name = name.trim();
        self.friends
            .values()
            .find(|friend| eq_ignore_case(friend.name(), name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Friend> + '_ {
        self.friends.values()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn validate_fields(name: &str, avatar: &str) -> Result<(), LedgerError> {
    if name.trim().is_empty() {
        return Err(LedgerError::MissingName);
    }
    if avatar.trim().is_empty() {
        return Err(LedgerError::MissingAvatar);
    }
    Ok(())
}
