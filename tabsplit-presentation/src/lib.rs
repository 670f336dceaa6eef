#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod form_presenter;
pub mod friend_list_presenter;
pub mod text_table;

pub use error_presenter::format_session_error;
pub use form_presenter::{AddFriendView, FormPresenter, FormView, SplitBillView};
pub use friend_list_presenter::{BalanceTone, FriendListPresenter, FriendListView, FriendRow};

use tabsplit_application::{ActionOutcome, Session};
use tabsplit_i18n as i18n;

/// Full screen: the friend list followed by whichever form is open.
pub fn render_screen(session: &Session) -> String {
    let mut screen = FriendListPresenter::render_text(&FriendListPresenter::render(session));
    if let Some(form) = FormPresenter::render(session) {
        screen.push('\n');
        screen.push_str(&FormPresenter::render_text(&form));
    }
    screen
}

/// Confirmation line for outcomes worth announcing.
pub fn format_outcome(session: &Session, outcome: &ActionOutcome) -> Option<String> {
    let name_of = |id| session.ledger().get(id).map(|friend| friend.name());
    match outcome {
        ActionOutcome::FriendAdded(id) => name_of(*id).map(i18n::friend_added),
        ActionOutcome::SettlementApplied { friend, .. } => {
            name_of(*friend).map(i18n::settlement_applied)
        }
        ActionOutcome::ModeChanged | ActionOutcome::DraftUpdated | ActionOutcome::Unchanged => {
            None
        }
    }
}
