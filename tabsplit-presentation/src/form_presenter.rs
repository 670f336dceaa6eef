use std::fmt::Write as _;

use tabsplit_application::{AddFriendForm, Session, SplitBillForm, UiMode};
use tabsplit_domain::Payer;
use tabsplit_i18n as i18n;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFriendView {
    pub name: String,
    pub avatar: String,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitBillView {
    pub title: String,
    pub bill: String,
    pub user_expense: String,
    pub friend_expense_label: String,
    /// Empty while the two amounts do not form a valid split.
    pub friend_expense: String,
    pub payer: Payer,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormView {
    AddFriend(AddFriendView),
    SplitBill(SplitBillView),
}

pub struct FormPresenter;

impl FormPresenter {
    pub fn render(session: &Session) -> Option<FormView> {
        match session.mode() {
            UiMode::Idle => None,
            UiMode::AddingFriend(form) => Some(FormView::AddFriend(Self::add_friend(form))),
            UiMode::Settling { form, .. } => {
                let friend = session.selected_friend()?;
                Some(FormView::SplitBill(Self::split_bill(friend.name(), form)))
            }
        }
    }

    pub fn add_friend(form: &AddFriendForm) -> AddFriendView {
        AddFriendView {
            name: form.name.clone(),
            avatar: form.avatar.clone(),
            submit_label: i18n::ADD,
        }
    }

    pub fn split_bill(friend_name: &str, form: &SplitBillForm) -> SplitBillView {
        SplitBillView {
            title: i18n::split_with(friend_name),
            bill: form.bill.clone(),
            user_expense: form.user_expense.clone(),
            friend_expense_label: i18n::friend_expense_label(friend_name),
            friend_expense: form
                .friend_expense()
                .map(|amount| amount.to_string())
                .unwrap_or_default(),
            payer: form.payer,
            submit_label: i18n::SPLIT_BILL,
        }
    }

    pub fn render_text(view: &FormView) -> String {
        let mut out = String::new();
        match view {
            FormView::AddFriend(view) => {
                let _ = writeln!(out, "{}: {}", i18n::NAME_LABEL, view.name);
                let _ = writeln!(out, "{}: {}", i18n::AVATAR_LABEL, view.avatar);
                let _ = writeln!(out, "[{}]", view.submit_label);
            }
            FormView::SplitBill(view) => {
                let _ = writeln!(out, "== {} ==", view.title);
                let _ = writeln!(out, "{}: {}", i18n::BILL_LABEL, view.bill);
                let _ = writeln!(out, "{}: {}", i18n::USER_EXPENSE_LABEL, view.user_expense);
                let _ = writeln!(out, "{}: {}", view.friend_expense_label, view.friend_expense);
                let _ = writeln!(out, "{}: {}", i18n::PAYER_LABEL, payer_label(view.payer));
                let _ = writeln!(out, "[{}]", view.submit_label);
            }
        }
        out
    }
}

pub fn payer_label(payer: Payer) -> &'static str {
    match payer {
        Payer::User => i18n::PAYER_USER,
        Payer::Friend => i18n::PAYER_FRIEND,
    }
}
