use tabsplit_domain::{Friend, FriendId, FriendLedger, LedgerError, Money};

const DEMO_FRIENDS: [(u64, &str, i64); 3] = [
    (118836, "Clark", -7),
    (933372, "Sarah", 20),
    (499476, "Anthony", 0),
];

/// Friends every demo session starts with.
pub fn demo_friends(avatar_base: &str) -> Vec<Friend> {
    DEMO_FRIENDS
        .iter()
        .map(|&(id, name, balance)| {
            Friend::new(
                FriendId(id),
                name,
                format!("{avatar_base}?u={id}"),
                Money::from_i64(balance),
            )
        })
        .collect()
}

pub fn initial_ledger(seed_demo: bool, avatar_base: &str) -> Result<FriendLedger, LedgerError> {
    if seed_demo {
        FriendLedger::from_friends(demo_friends(avatar_base))
    } else {
        Ok(FriendLedger::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::seeded(true, 3)]
    #[case::empty(false, 0)]
    fn initial_ledger_cases(#[case] seed_demo: bool, #[case] expected_len: usize) {
        let ledger = initial_ledger(seed_demo, "https://i.pravatar.cc/48").expect("valid seed");
        assert_eq!(ledger.len(), expected_len);
    }

    #[test]
    fn demo_avatars_are_personalized() {
        let friends = demo_friends("https://i.pravatar.cc/48");
        assert_eq!(friends[0].avatar(), "https://i.pravatar.cc/48?u=118836");
        assert_eq!(friends[1].balance(), Money::from_i64(20));
    }
}
