use tabsplit_application::{
    AddFriendError, FormField, FormKind, SessionError, SplitBillError,
};
use tabsplit_domain::{LedgerError, SettlementInputError};
use tabsplit_i18n as i18n;

/// Alert text shown to the user for a rejected action.
pub fn format_session_error(error: &SessionError) -> String {
    match error {
        SessionError::AddFriend(AddFriendError::MissingFields) => i18n::FILL_ALL_FIELDS.to_string(),
        SessionError::SplitBill(err) => format_split_bill_error(err),
        SessionError::UnknownFriend(id) => i18n::unknown_friend(id),
        SessionError::FormNotOpen(FormKind::AddFriend) => i18n::ADD_FRIEND_FORM_CLOSED.to_string(),
        SessionError::FormNotOpen(FormKind::SplitBill) => i18n::SPLIT_BILL_FORM_CLOSED.to_string(),
        SessionError::NothingToSubmit => i18n::NOTHING_TO_SUBMIT.to_string(),
    }
}

fn format_split_bill_error(error: &SplitBillError) -> String {
    match error {
        SplitBillError::MissingFields => i18n::FILL_ALL_FIELDS.to_string(),
        SplitBillError::NotANumber { field, input } => {
            i18n::not_a_number(field_label(*field), input)
        }
        SplitBillError::OutOfRange { field, input } => {
            i18n::out_of_range(field_label(*field), input)
        }
        SplitBillError::Invalid(SettlementInputError::NegativeBill { .. }) => {
            i18n::NEGATIVE_BILL.to_string()
        }
        SplitBillError::Invalid(SettlementInputError::NegativeExpense { .. }) => {
            i18n::NEGATIVE_EXPENSE.to_string()
        }
        SplitBillError::Invalid(SettlementInputError::ExpenseExceedsBill { .. }) => {
            i18n::EXPENSE_EXCEEDS_BILL.to_string()
        }
        SplitBillError::Ledger(err) => format_ledger_error(err),
    }
}

fn format_ledger_error(error: &LedgerError) -> String {
    match error {
        LedgerError::MissingName | LedgerError::MissingAvatar => i18n::FILL_ALL_FIELDS.to_string(),
        LedgerError::UnknownFriend(id) => i18n::unknown_friend(id),
        LedgerError::DuplicateId(id) => i18n::duplicate_friend(id),
        LedgerError::BalanceOverflow(_) => i18n::BALANCE_OVERFLOW.to_string(),
    }
}

fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::Bill => i18n::BILL_LABEL,
        FormField::UserExpense => i18n::USER_EXPENSE_LABEL,
    }
}
