use sqlx::types::BigDecimal;

pub fn zero() -> BigDecimal {
    BigDecimal::from(0)
}

/// Exact decimal sum. Absent amounts count as zero and nothing is rounded.
pub fn sum<'a, I>(amounts: I) -> BigDecimal
where
    I: IntoIterator<Item = Option<&'a BigDecimal>>,
{
    amounts
        .into_iter()
        .flatten()
        .fold(zero(), |acc, amount| acc + amount)
}

pub fn is_negative(amount: &BigDecimal) -> bool {
    *amount < zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(raw: &str) -> BigDecimal {
        BigDecimal::from_str(raw).unwrap()
    }

    #[test]
    fn sums_without_rounding() {
        let amounts = [dec("0.1"), dec("0.2"), dec("1250.455")];
        assert_eq!(sum(amounts.iter().map(Some)), dec("1250.755"));
    }

    #[test]
    fn missing_amounts_count_as_zero() {
        let paid = dec("12.50");
        assert_eq!(sum([Some(&paid), None, None]), dec("12.5"));
        assert_eq!(sum(std::iter::empty()), zero());
    }

    #[test]
    fn detects_negative_prices() {
        assert!(is_negative(&dec("-0.01")));
        assert!(!is_negative(&zero()));
    }
}
