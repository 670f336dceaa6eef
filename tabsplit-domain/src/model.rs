use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use rust_decimal::Decimal;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FriendId(pub u64);

impl FriendId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(Decimal);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,
    #[error("'{input}' is not a number")]
    NotANumber { input: String },
    #[error("'{input}' cannot be represented exactly")]
    OutOfRange { input: String },
}

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    /// Parses user-entered text. Surrounding whitespace is ignored.
    ///
    /// Numbers that would be rounded or do not fit a `Decimal` are rejected
    /// with [`MoneyParseError::OutOfRange`] rather than silently altered.
    pub fn parse(text: &str) -> Result<Self, MoneyParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        match Decimal::from_str_exact(trimmed) {
            Ok(value) => Ok(Self(value)),
            Err(_) if is_numeric_literal(trimmed) => Err(MoneyParseError::OutOfRange {
                input: trimmed.to_string(),
            }),
            Err(_) => Err(MoneyParseError::NotANumber {
                input: trimmed.to_string(),
            }),
        }
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }
}

/// Optional sign, digits, at most one decimal point.
fn is_numeric_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let mut parts = unsigned.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit() || c == '_');

    (whole.chars().any(|c| c.is_ascii_digit()) || fraction.chars().any(|c| c.is_ascii_digit()))
        && all_digits(whole)
        && all_digits(fraction)
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0 would otherwise print with a sign
        let value = if self.0.is_zero() {
            Decimal::ZERO
        } else {
            self.0.normalize()
        };
        write!(f, "{value}")
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// A friend and the running balance between them and the user.
///
/// Negative balance: the user owes the friend. Positive: the friend owes the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Friend {
    id: FriendId,
    name: String,
    avatar: String,
    balance: Money,
}

impl Friend {
    pub fn new(
        id: FriendId,
        name: impl Into<String>,
        avatar: impl Into<String>,
        balance: Money,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: avatar.into(),
            balance,
        }
    }

    pub fn id(&self) -> FriendId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn standing(&self) -> BalanceStanding {
        BalanceStanding::of(self.balance)
    }

    /// Adds `delta` to the balance. Returns `None`, leaving the balance as it
    /// was, when the sum does not fit.
    pub(crate) fn credit(&mut self, delta: Money) -> Option<Money> {
        self.balance = self.balance.checked_add(delta)?;
        Some(self.balance)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceStanding {
    YouOwe(Money),
    OwesYou(Money),
    Settled,
}

impl BalanceStanding {
    pub fn of(balance: Money) -> Self {
        if balance.is_negative() {
            Self::YouOwe(balance.abs())
        } else if balance.is_positive() {
            Self::OwesYou(balance)
        } else {
            Self::Settled
        }
    }
}

/// Who fronted the whole bill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SettlementInputError {
    #[error("bill total {bill} is negative")]
    NegativeBill { bill: Money },
    #[error("expense {expense} is negative")]
    NegativeExpense { expense: Money },
    #[error("expense {expense} exceeds bill total {bill}")]
    ExpenseExceedsBill { bill: Money, expense: Money },
}

/// A validated bill split: `0 <= user_expense <= bill`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementInput {
    bill: Money,
    user_expense: Money,
    payer: Payer,
}

impl SettlementInput {
    pub fn try_new(
        bill: Money,
        user_expense: Money,
        payer: Payer,
    ) -> Result<Self, SettlementInputError> {
        if bill.is_negative() {
            return Err(SettlementInputError::NegativeBill { bill });
        }
        if user_expense.is_negative() {
            return Err(SettlementInputError::NegativeExpense {
                expense: user_expense,
            });
        }
        if user_expense > bill {
            return Err(SettlementInputError::ExpenseExceedsBill {
                bill,
                expense: user_expense,
            });
        }

        Ok(Self {
            bill,
            user_expense,
            payer,
        })
    }

    pub fn bill(&self) -> Money {
        self.bill
    }

    pub fn user_expense(&self) -> Money {
        self.user_expense
    }

    pub fn friend_expense(&self) -> Money {
        self.bill - self.user_expense
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }
}
