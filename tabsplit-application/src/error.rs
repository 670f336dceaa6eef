use tabsplit_domain::{FriendId, LedgerError, SettlementInputError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    AddFriend,
    SplitBill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Bill,
    UserExpense,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddFriendError {
    #[error("name and avatar are both required")]
    MissingFields,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitBillError {
    #[error("bill and expense are both required")]
    MissingFields,
    #[error("{field:?} '{input}' is not a number")]
    NotANumber { field: FormField, input: String },
    #[error("{field:?} '{input}' is out of range")]
    OutOfRange { field: FormField, input: String },
    #[error(transparent)]
    Invalid(#[from] SettlementInputError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    AddFriend(#[from] AddFriendError),
    #[error(transparent)]
    SplitBill(#[from] SplitBillError),
    #[error("friend {0} does not exist")]
    UnknownFriend(FriendId),
    #[error("{0:?} form is not open")]
    FormNotOpen(FormKind),
    #[error("no form is open")]
    NothingToSubmit,
}
