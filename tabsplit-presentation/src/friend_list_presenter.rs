use std::borrow::Cow;

use tabsplit_application::Session;
use tabsplit_domain::{BalanceStanding, Friend, FriendId};
use tabsplit_i18n as i18n;

use crate::text_table::{Alignment, TextTableBuilder};

const SELECTED_MARKER: &str = ">";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceTone {
    /// The user owes the friend.
    Owing,
    /// The friend owes the user.
    Owed,
    Even,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendRow {
    pub id: FriendId,
    pub name: String,
    pub avatar: String,
    pub standing: String,
    pub tone: BalanceTone,
    pub selected: bool,
    pub action_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendListView {
    pub rows: Vec<FriendRow>,
    pub toggle_label: &'static str,
}

pub struct FriendListPresenter;

impl FriendListPresenter {
    pub fn render(session: &Session) -> FriendListView {
        let selected = session.mode().selected_friend();
        let rows = session
            .ledger()
            .iter()
            .map(|friend| Self::row(friend, selected == Some(friend.id())))
            .collect();

        FriendListView {
            rows,
            toggle_label: if session.mode().is_adding_friend() {
                i18n::CLOSE
            } else {
                i18n::ADD_FRIEND
            },
        }
    }

    pub fn row(friend: &Friend, selected: bool) -> FriendRow {
        let (standing, tone) = describe_standing(friend.name(), friend.standing());
        FriendRow {
            id: friend.id(),
            name: friend.name().to_string(),
            avatar: friend.avatar().to_string(),
            standing,
            tone,
            selected,
            action_label: if selected { i18n::CLOSE } else { i18n::SELECT },
        }
    }

    pub fn render_text(view: &FriendListView) -> String {
        if view.rows.is_empty() {
            return format!("{}\n[{}]\n", i18n::NO_FRIENDS, view.toggle_label);
        }

        let headers = [
            Cow::Borrowed(""),
            Cow::Borrowed(i18n::ID),
            Cow::Borrowed(i18n::FRIEND),
            Cow::Borrowed(i18n::BALANCE),
            Cow::Borrowed(""),
            Cow::Borrowed(i18n::AVATAR),
        ];
        let table = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Left,
                Alignment::Left,
                Alignment::Left,
                Alignment::Left,
            ])
            .headers(&headers)
            .rows(view.rows.iter().map(|row| {
                [
                    Cow::Borrowed(if row.selected { SELECTED_MARKER } else { "" }),
                    Cow::Owned(row.id.to_string()),
                    Cow::Borrowed(row.name.as_str()),
                    Cow::Borrowed(row.standing.as_str()),
                    Cow::Owned(format!("[{}]", row.action_label)),
                    Cow::Borrowed(row.avatar.as_str()),
                ]
            }))
            .build();

        format!("{table}[{}]\n", view.toggle_label)
    }
}

fn describe_standing(name: &str, standing: BalanceStanding) -> (String, BalanceTone) {
    match standing {
        BalanceStanding::YouOwe(amount) => (i18n::you_owe(name, amount), BalanceTone::Owing),
        BalanceStanding::OwesYou(amount) => (i18n::owes_you(name, amount), BalanceTone::Owed),
        BalanceStanding::Settled => (i18n::even(name), BalanceTone::Even),
    }
}

#[cfg(all(test, not(feature = "ja")))]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tabsplit_domain::{FriendLedger, Money};

    #[fixture]
    fn session() -> Session {
        let ledger = FriendLedger::from_friends([
            Friend::new(FriendId(1), "Clark", "https://i.pravatar.cc/48?u=1", Money::from_i64(-7)),
            Friend::new(FriendId(2), "Sarah", "https://i.pravatar.cc/48?u=2", Money::from_i64(20)),
            Friend::new(FriendId(3), "Anthony", "https://i.pravatar.cc/48?u=3", Money::ZERO),
        ])
        .expect("seed ledger");
        Session::new(ledger)
    }

    #[rstest]
    #[case::owing(-7, "You owe Clark ₹7", BalanceTone::Owing)]
    #[case::owed(53, "Clark owes you ₹53", BalanceTone::Owed)]
    #[case::even(0, "You and Clark are even", BalanceTone::Even)]
    fn standing_phrases(#[case] balance: i64, #[case] text: &str, #[case] tone: BalanceTone) {
        let friend = Friend::new(FriendId(1), "Clark", "a", Money::from_i64(balance));
        let row = FriendListPresenter::row(&friend, false);
        assert_eq!(row.standing, text);
        assert_eq!(row.tone, tone);
        assert_eq!(row.action_label, "Select");
    }

    #[rstest]
    fn selected_row_offers_close(mut session: Session) {
        session.select_friend(FriendId(2)).expect("known friend");

        let view = FriendListPresenter::render(&session);

        let selected: Vec<FriendId> = view
            .rows
            .iter()
            .filter(|row| row.selected)
            .map(|row| row.id)
            .collect();
        assert_eq!(selected, [FriendId(2)]);
        assert_eq!(view.rows[1].action_label, "Close");
        assert_eq!(view.toggle_label, "Add Friend");
    }

    #[rstest]
    fn toggle_label_follows_add_friend_panel(mut session: Session) {
        session.toggle_add_friend();
        assert_eq!(FriendListPresenter::render(&session).toggle_label, "Close");
    }

    #[rstest]
    fn text_lists_every_friend(session: Session) {
        let text = FriendListPresenter::render_text(&FriendListPresenter::render(&session));

        assert!(text.contains("You owe Clark ₹7"));
        assert!(text.contains("Sarah owes you ₹20"));
        assert!(text.contains("You and Anthony are even"));
        assert!(text.ends_with("[Add Friend]\n"));
    }

    #[test]
    fn empty_list_has_placeholder() {
        let session = Session::new(FriendLedger::new());
        let text = FriendListPresenter::render_text(&FriendListPresenter::render(&session));
        assert_eq!(text, "No friends yet\n[Add Friend]\n");
    }
}
