//! Unique-code pricing helpers.
//!
//! On checkout a random integer in [1, 999] is appended to the bundle price
//! to form the transfer amount. The admin reconciles incoming bank transfers
//! by matching the last three digits of the received amount against the code.
//! This is a manual-reconciliation convenience only: no uniqueness is
//! enforced across concurrent orders, so two customers can be assigned the
//! same code simultaneously.

use rand::Rng;

/// Smallest assignable unique code.
pub const UNIQUE_CODE_MIN: i64 = 1;

/// Largest assignable unique code (three digits).
pub const UNIQUE_CODE_MAX: i64 = 999;

/// Draw a random unique code in [`UNIQUE_CODE_MIN`, `UNIQUE_CODE_MAX`].
#[must_use]
pub fn random_unique_code() -> i64 {
    rand::thread_rng().gen_range(UNIQUE_CODE_MIN..=UNIQUE_CODE_MAX)
}

/// The amount the customer is asked to transfer.
#[must_use]
pub const fn final_price(price: i64, unique_code: i64) -> i64 {
    price + unique_code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_stays_in_range() {
        for _ in 0..1_000 {
            let code = random_unique_code();
            assert!((UNIQUE_CODE_MIN..=UNIQUE_CODE_MAX).contains(&code));
        }
    }

    #[test]
    fn final_price_adds_code() {
        assert_eq!(final_price(15_000, 421), 15_421);
        assert_eq!(final_price(15_000, 0), 15_000);
    }

    #[test]
    fn last_three_digits_recover_code() {
        // The reconciliation trick: codes never exceed three digits, so the
        // tail of the transfer amount identifies the order.
        let price = 50_000;
        let code = 387;
        assert_eq!(final_price(price, code) % 1_000, code);
    }
}
