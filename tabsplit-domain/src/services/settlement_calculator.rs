use crate::model::{Money, Payer, SettlementInput};

/// Settlement calculation service
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Signed delta to add to the selected friend's balance.
    ///
    /// When the user fronts the bill the friend owes their own portion
    /// (`bill - user_expense`). When the friend fronts it the user owes the
    /// friend the user's portion.
    pub fn compute_delta(&self, input: &SettlementInput) -> Money {
        let delta = match input.payer() {
            Payer::User => input.friend_expense(),
            Payer::Friend => -input.user_expense(),
        };

        tracing::debug!(
            bill = %input.bill(),
            user_expense = %input.user_expense(),
            payer = ?input.payer(),
            %delta,
            "computed settlement delta"
        );

        delta
    }
}
