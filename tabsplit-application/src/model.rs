use tabsplit_domain::{FriendId, Money, Payer, SettlementInput};

/// Draft of the add-friend form. Fields hold raw text as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFriendForm {
    pub name: String,
    pub avatar: String,
}

impl AddFriendForm {
    pub fn new(default_avatar: &str) -> Self {
        Self {
            name: String::new(),
            avatar: default_avatar.to_string(),
        }
    }
}

/// Draft of the split-bill form. Amounts hold raw text and are only
/// validated on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitBillForm {
    pub bill: String,
    pub user_expense: String,
    pub payer: Payer,
}

impl SplitBillForm {
    /// The friend's share, when both amounts currently form a valid split.
    pub fn friend_expense(&self) -> Option<Money> {
        let bill = Money::parse(&self.bill).ok()?;
        let user_expense = Money::parse(&self.user_expense).ok()?;
        SettlementInput::try_new(bill, user_expense, self.payer)
            .ok()
            .map(|input| input.friend_expense())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiMode {
    #[default]
    Idle,
    AddingFriend(AddFriendForm),
    Settling {
        friend: FriendId,
        form: SplitBillForm,
    },
}

impl UiMode {
    pub fn is_adding_friend(&self) -> bool {
        matches!(self, Self::AddingFriend(_))
    }

    pub fn selected_friend(&self) -> Option<FriendId> {
        match self {
            Self::Settling { friend, .. } => Some(*friend),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleAddFriend,
    EditFriendName(String),
    EditFriendAvatar(String),
    SelectFriend(FriendId),
    DeselectFriend,
    EditBill(String),
    EditUserExpense(String),
    SetPayer(Payer),
    /// Submits whichever form is open.
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    ModeChanged,
    DraftUpdated,
    FriendAdded(FriendId),
    SettlementApplied {
        friend: FriendId,
        delta: Money,
        balance: Money,
    },
    Unchanged,
}
