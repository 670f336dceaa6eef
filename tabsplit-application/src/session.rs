use tabsplit_domain::{
    Friend, FriendId, FriendLedger, Money, MoneyParseError, SettlementCalculator,
    SettlementInput,
};

use crate::{
    error::{AddFriendError, FormField, FormKind, SessionError, SplitBillError},
    model::{Action, ActionOutcome, AddFriendForm, SplitBillForm, UiMode},
};

pub const DEFAULT_AVATAR_BASE: &str = "https://i.pravatar.cc/48";

/// State of one interactive session: the friend ledger plus whatever the
/// user currently has open.
///
/// Every mutation goes through `&mut self`; a rejected action leaves both the
/// ledger and the open form untouched.
pub struct Session {
    ledger: FriendLedger,
    mode: UiMode,
    default_avatar: String,
    calculator: SettlementCalculator,
}

impl Session {
    pub fn new(ledger: FriendLedger) -> Self {
        Self::with_default_avatar(ledger, DEFAULT_AVATAR_BASE)
    }

    pub fn with_default_avatar(ledger: FriendLedger, default_avatar: impl Into<String>) -> Self {
        Self {
            ledger,
            mode: UiMode::Idle,
            default_avatar: default_avatar.into(),
            calculator: SettlementCalculator,
        }
    }

    pub fn ledger(&self) -> &FriendLedger {
        &self.ledger
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.mode
            .selected_friend()
            .and_then(|id| self.ledger.get(id))
    }

    pub fn dispatch(&mut self, action: Action) -> Result<ActionOutcome, SessionError> {
        tracing::debug!(?action, "dispatching action");

        let result = self.apply(action);
        if let Err(err) = &result {
            tracing::warn!(%err, "action rejected");
        }
        result
    }

    fn apply(&mut self, action: Action) -> Result<ActionOutcome, SessionError> {
        match action {
            Action::ToggleAddFriend => Ok(self.toggle_add_friend()),
            Action::EditFriendName(name) => {
                self.add_friend_form_mut()?.name = name;
                Ok(ActionOutcome::DraftUpdated)
            }
            Action::EditFriendAvatar(avatar) => {
                self.add_friend_form_mut()?.avatar = avatar;
                Ok(ActionOutcome::DraftUpdated)
            }
            Action::SelectFriend(id) => self.select_friend(id),
            Action::DeselectFriend => Ok(self.deselect_friend()),
            Action::EditBill(bill) => {
                self.split_bill_form_mut()?.bill = bill;
                Ok(ActionOutcome::DraftUpdated)
            }
            Action::EditUserExpense(user_expense) => {
                self.split_bill_form_mut()?.user_expense = user_expense;
                Ok(ActionOutcome::DraftUpdated)
            }
            Action::SetPayer(payer) => {
                self.split_bill_form_mut()?.payer = payer;
                Ok(ActionOutcome::DraftUpdated)
            }
            Action::Submit => match self.mode {
                UiMode::AddingFriend(_) => self.submit_add_friend().map_err(SessionError::from),
                UiMode::Settling { .. } => self.submit_split_bill().map_err(SessionError::from),
                UiMode::Idle => Err(SessionError::NothingToSubmit),
            },
        }
    }

    /// Opens the add-friend panel, or closes it when already open.
    pub fn toggle_add_friend(&mut self) -> ActionOutcome {
        self.mode = match self.mode {
            UiMode::AddingFriend(_) => UiMode::Idle,
            _ => UiMode::AddingFriend(AddFriendForm::new(&self.default_avatar)),
        };
        ActionOutcome::ModeChanged
    }

    /// Makes `id` the settlement target. Selecting the current target again
    /// deselects it.
    pub fn select_friend(&mut self, id: FriendId) -> Result<ActionOutcome, SessionError> {
        if !self.ledger.contains(id) {
            return Err(SessionError::UnknownFriend(id));
        }

        self.mode = match self.mode {
            UiMode::Settling { friend, .. } if friend == id => UiMode::Idle,
            _ => UiMode::Settling {
                friend: id,
                form: SplitBillForm::default(),
            },
        };
        Ok(ActionOutcome::ModeChanged)
    }

    pub fn deselect_friend(&mut self) -> ActionOutcome {
        if let UiMode::Settling { .. } = self.mode {
            self.mode = UiMode::Idle;
            ActionOutcome::ModeChanged
        } else {
            ActionOutcome::Unchanged
        }
    }

    pub fn submit_add_friend(&mut self) -> Result<ActionOutcome, AddFriendError> {
        let UiMode::AddingFriend(form) = &self.mode else {
            return Ok(ActionOutcome::Unchanged);
        };
        if form.name.trim().is_empty() || form.avatar.trim().is_empty() {
            return Err(AddFriendError::MissingFields);
        }

        let avatar = form.avatar.trim();
        // only blank fields are rejected, and those were checked above
        let id = self
            .ledger
            .add_friend_with(&form.name, |id| personalize_avatar(avatar, id))
            .map_err(|_| AddFriendError::MissingFields)?;

        self.mode = UiMode::Idle;
        Ok(ActionOutcome::FriendAdded(id))
    }

    pub fn submit_split_bill(&mut self) -> Result<ActionOutcome, SplitBillError> {
        let UiMode::Settling { friend, form } = &self.mode else {
            return Ok(ActionOutcome::Unchanged);
        };
        let friend = *friend;
        let input = validate_split(form)?;

        let delta = self.calculator.compute_delta(&input);
        let balance = self.ledger.apply_settlement(friend, delta)?;

        self.mode = UiMode::Idle;
        Ok(ActionOutcome::SettlementApplied {
            friend,
            delta,
            balance,
        })
    }

    fn add_friend_form_mut(&mut self) -> Result<&mut AddFriendForm, SessionError> {
        match &mut self.mode {
            UiMode::AddingFriend(form) => Ok(form),
            _ => Err(SessionError::FormNotOpen(FormKind::AddFriend)),
        }
    }

    fn split_bill_form_mut(&mut self) -> Result<&mut SplitBillForm, SessionError> {
        match &mut self.mode {
            UiMode::Settling { form, .. } => Ok(form),
            _ => Err(SessionError::FormNotOpen(FormKind::SplitBill)),
        }
    }
}

fn validate_split(form: &SplitBillForm) -> Result<SettlementInput, SplitBillError> {
    if form.bill.trim().is_empty() || form.user_expense.trim().is_empty() {
        return Err(SplitBillError::MissingFields);
    }
    let bill = parse_amount(&form.bill, FormField::Bill)?;
    let user_expense = parse_amount(&form.user_expense, FormField::UserExpense)?;

    Ok(SettlementInput::try_new(bill, user_expense, form.payer)?)
}

fn parse_amount(text: &str, field: FormField) -> Result<Money, SplitBillError> {
    Money::parse(text).map_err(|err| match err {
        MoneyParseError::OutOfRange { input } => SplitBillError::OutOfRange { field, input },
        MoneyParseError::Empty | MoneyParseError::NotANumber { .. } => {
            SplitBillError::NotANumber {
                field,
                input: text.trim().to_string(),
            }
        }
    })
}

/// Pins a generated avatar to the friend so the image stays stable.
fn personalize_avatar(avatar: &str, id: FriendId) -> String {
    let separator = if avatar.contains('?') { '&' } else { '?' };
    format!("{avatar}{separator}u={id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tabsplit_domain::{Payer, SettlementInputError};

    const CLARK: FriendId = FriendId(118836);
    const SARAH: FriendId = FriendId(933372);

    #[fixture]
    fn session() -> Session {
        let ledger = FriendLedger::from_friends([
            Friend::new(CLARK, "Clark", "avatar/clark", Money::from_i64(-7)),
            Friend::new(SARAH, "Sarah", "avatar/sarah", Money::from_i64(20)),
        ])
        .expect("seed ledger");
        Session::new(ledger)
    }

    fn balance_of(session: &Session, id: FriendId) -> Money {
        session
            .ledger()
            .get(id)
            .map(Friend::balance)
            .expect("friend present")
    }

    fn fill_split(session: &mut Session, bill: &str, expense: &str, payer: Payer) {
        session
            .dispatch(Action::EditBill(bill.to_string()))
            .expect("form open");
        session
            .dispatch(Action::EditUserExpense(expense.to_string()))
            .expect("form open");
        session.dispatch(Action::SetPayer(payer)).expect("form open");
    }

    #[rstest]
    #[case::avatar_without_query("https://i.pravatar.cc/48", "https://i.pravatar.cc/48?u=7")]
    #[case::avatar_with_query("https://img.test/a?size=48", "https://img.test/a?size=48&u=7")]
    fn personalize_avatar_cases(#[case] avatar: &str, #[case] expected: &str) {
        assert_eq!(personalize_avatar(avatar, FriendId(7)), expected);
    }

    #[rstest]
    fn toggle_add_friend_opens_and_closes(mut session: Session) {
        session.toggle_add_friend();
        assert_eq!(
            session.mode(),
            &UiMode::AddingFriend(AddFriendForm::new(DEFAULT_AVATAR_BASE))
        );

        session.toggle_add_friend();
        assert_eq!(session.mode(), &UiMode::Idle);
    }

    #[rstest]
    fn selecting_friend_closes_add_friend(mut session: Session) {
        session.toggle_add_friend();
        session.select_friend(CLARK).expect("known friend");

        assert!(!session.mode().is_adding_friend());
        assert_eq!(session.mode().selected_friend(), Some(CLARK));
    }

    #[rstest]
    fn opening_add_friend_drops_selection(mut session: Session) {
        session.select_friend(CLARK).expect("known friend");
        session.toggle_add_friend();

        assert!(session.mode().is_adding_friend());
        assert_eq!(session.selected_friend(), None);
    }

    #[rstest]
    fn selecting_same_friend_twice_deselects(mut session: Session) {
        session.select_friend(SARAH).expect("known friend");
        session.select_friend(SARAH).expect("known friend");
        assert_eq!(session.mode(), &UiMode::Idle);
    }

    #[rstest]
    fn switching_friend_resets_split_form(mut session: Session) {
        session.select_friend(CLARK).expect("known friend");
        fill_split(&mut session, "100", "40", Payer::Friend);
        session.select_friend(SARAH).expect("known friend");

        assert_eq!(
            session.mode(),
            &UiMode::Settling {
                friend: SARAH,
                form: SplitBillForm::default(),
            }
        );
    }

    #[rstest]
    fn selecting_unknown_friend_is_rejected(mut session: Session) {
        assert_eq!(
            session.select_friend(FriendId(1)),
            Err(SessionError::UnknownFriend(FriendId(1)))
        );
        assert_eq!(session.mode(), &UiMode::Idle);
    }

    #[rstest]
    fn deselect_when_idle_is_noop(mut session: Session) {
        assert_eq!(session.deselect_friend(), ActionOutcome::Unchanged);
    }

    #[rstest]
    fn user_paying_credits_friend_share(mut session: Session) {
        session.select_friend(CLARK).expect("known friend");
        fill_split(&mut session, "100", "40", Payer::User);

        let outcome = session.dispatch(Action::Submit).expect("valid split");

        assert_eq!(
            outcome,
            ActionOutcome::SettlementApplied {
                friend: CLARK,
                delta: Money::from_i64(60),
                balance: Money::from_i64(53),
            }
        );
        assert_eq!(balance_of(&session, CLARK), Money::from_i64(53));
        assert_eq!(session.mode(), &UiMode::Idle);
    }

    #[rstest]
    fn friend_paying_debits_user_share(mut session: Session) {
        session.select_friend(SARAH).expect("known friend");
        fill_split(&mut session, "50", "20", Payer::Friend);

        session.dispatch(Action::Submit).expect("valid split");

        assert_eq!(balance_of(&session, SARAH), Money::ZERO);
    }

    #[rstest]
    #[case::missing_bill("", "40", SplitBillError::MissingFields)]
    #[case::missing_expense("100", "  ", SplitBillError::MissingFields)]
    #[case::bill_not_a_number(
        "lots",
        "40",
        SplitBillError::NotANumber { field: FormField::Bill, input: "lots".to_string() }
    )]
    #[case::expense_not_a_number(
        "100",
        "4o",
        SplitBillError::NotANumber { field: FormField::UserExpense, input: "4o".to_string() }
    )]
    #[case::expense_loses_precision(
        "100",
        "0.000000000000000000000000000049",
        SplitBillError::OutOfRange {
            field: FormField::UserExpense,
            input: "0.000000000000000000000000000049".to_string(),
        }
    )]
    #[case::bill_too_large(
        "79228162514264337593543950336",
        "0",
        SplitBillError::OutOfRange {
            field: FormField::Bill,
            input: "79228162514264337593543950336".to_string(),
        }
    )]
    #[case::expense_over_bill(
        "100",
        "120",
        SplitBillError::Invalid(SettlementInputError::ExpenseExceedsBill {
            bill: Money::from_i64(100),
            expense: Money::from_i64(120),
        })
    )]
    #[case::negative_expense(
        "100",
        "-1",
        SplitBillError::Invalid(SettlementInputError::NegativeExpense {
            expense: Money::from_i64(-1),
        })
    )]
    #[case::negative_bill(
        "-100",
        "0",
        SplitBillError::Invalid(SettlementInputError::NegativeBill {
            bill: Money::from_i64(-100),
        })
    )]
    fn invalid_split_leaves_state_unchanged(
        mut session: Session,
        #[case] bill: &str,
        #[case] expense: &str,
        #[case] expected: SplitBillError,
    ) {
        session.select_friend(CLARK).expect("known friend");
        fill_split(&mut session, bill, expense, Payer::User);
        let mode_before = session.mode().clone();

        let result = session.dispatch(Action::Submit);

        assert_eq!(result, Err(SessionError::SplitBill(expected)));
        assert_eq!(balance_of(&session, CLARK), Money::from_i64(-7));
        assert_eq!(session.mode(), &mode_before);
    }

    #[rstest]
    fn add_friend_appends_zero_balance_friend(mut session: Session) {
        session.toggle_add_friend();
        session
            .dispatch(Action::EditFriendName("Dana".to_string()))
            .expect("form open");

        let outcome = session.dispatch(Action::Submit).expect("valid friend");

        let ActionOutcome::FriendAdded(id) = outcome else {
            panic!("expected FriendAdded, got {outcome:?}");
        };
        let friend = session.ledger().get(id).expect("friend present");
        assert_eq!(friend.balance(), Money::ZERO);
        assert_eq!(friend.avatar(), format!("{DEFAULT_AVATAR_BASE}?u={id}"));
        assert_ne!(id, CLARK);
        assert_ne!(id, SARAH);
        assert_eq!(session.mode(), &UiMode::Idle);
    }

    #[rstest]
    #[case::empty_name("", DEFAULT_AVATAR_BASE)]
    #[case::empty_avatar("Dana", "")]
    fn add_friend_with_missing_field_is_rejected(
        mut session: Session,
        #[case] name: &str,
        #[case] avatar: &str,
    ) {
        session.toggle_add_friend();
        session
            .dispatch(Action::EditFriendName(name.to_string()))
            .expect("form open");
        session
            .dispatch(Action::EditFriendAvatar(avatar.to_string()))
            .expect("form open");

        let result = session.dispatch(Action::Submit);

        assert_eq!(
            result,
            Err(SessionError::AddFriend(AddFriendError::MissingFields))
        );
        assert_eq!(session.ledger().len(), 2);
        assert!(session.mode().is_adding_friend());
    }

    #[rstest]
    fn editing_closed_form_is_rejected(mut session: Session) {
        assert_eq!(
            session.dispatch(Action::EditBill("10".to_string())),
            Err(SessionError::FormNotOpen(FormKind::SplitBill))
        );
        assert_eq!(
            session.dispatch(Action::EditFriendName("Dana".to_string())),
            Err(SessionError::FormNotOpen(FormKind::AddFriend))
        );
    }

    #[rstest]
    fn submit_with_nothing_open_is_rejected(mut session: Session) {
        assert_eq!(
            session.dispatch(Action::Submit),
            Err(SessionError::NothingToSubmit)
        );
    }
}
