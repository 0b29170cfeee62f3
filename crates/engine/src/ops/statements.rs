use chrono::NaiveDate;

use crate::{Operation, ResultEngine};

use super::Ledger;

impl Ledger {
    /// The full statement of an account, in append order.
    pub fn statement(&self, tax_id: &str) -> ResultEngine<&[Operation]> {
        Ok(&self.find_account(tax_id)?.statement)
    }

    /// Operations created on `date`, in statement order.
    ///
    /// The calendar date of an operation is taken in the ledger time zone.
    pub fn statement_for_date(
        &self,
        tax_id: &str,
        date: NaiveDate,
    ) -> ResultEngine<Vec<&Operation>> {
        let tz = self.timezone;
        Ok(self
            .find_account(tax_id)?
            .statement
            .iter()
            .filter(|op| op.created_at.with_timezone(&tz).date_naive() == date)
            .collect())
    }

    /// Current balance, folded from the statement.
    pub fn balance(&self, tax_id: &str) -> ResultEngine<i64> {
        Ok(self.find_account(tax_id)?.balance())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{DateTime, TimeZone, Utc};
    use chrono_tz::Tz;

    use crate::{Clock, EngineError};

    use super::*;

    #[derive(Debug)]
    struct StepClock(Mutex<Vec<DateTime<Utc>>>);

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Utc> {
            let mut times = self.0.lock().unwrap();
            times.remove(0)
        }
    }

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn ledger_at(times: Vec<DateTime<Utc>>, tz: Tz) -> Ledger {
        let mut ledger = Ledger::builder()
            .clock(Arc::new(StepClock(Mutex::new(times))))
            .timezone(tz)
            .build();
        ledger.create_account("1", "Alice").unwrap();
        ledger
    }

    #[test]
    fn filters_by_calendar_date_in_order() {
        let mut ledger = ledger_at(
            vec![
                utc(2024, 3, 1, 9),
                utc(2024, 3, 2, 10),
                utc(2024, 3, 2, 23),
                utc(2024, 3, 3, 0),
            ],
            Tz::UTC,
        );
        ledger.deposit("1", 10, Some("a")).unwrap();
        ledger.deposit("1", 20, Some("b")).unwrap();
        ledger.withdraw("1", 5).unwrap();
        ledger.deposit("1", 40, Some("d")).unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let ops = ledger.statement_for_date("1", day).unwrap();

        let amounts: Vec<_> = ops.iter().map(|op| op.amount).collect();
        assert_eq!(amounts, [20, 5]);
    }

    #[test]
    fn no_match_returns_empty() {
        let mut ledger = ledger_at(vec![utc(2024, 3, 1, 9)], Tz::UTC);
        ledger.deposit("1", 10, None).unwrap();

        let day = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert!(ledger.statement_for_date("1", day).unwrap().is_empty());
    }

    #[test]
    fn calendar_date_follows_ledger_timezone() {
        // 23:30 UTC on March 1st is already March 2nd in Rome.
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        let mut ledger = ledger_at(vec![at], chrono_tz::Europe::Rome);
        ledger.deposit("1", 10, None).unwrap();

        let march_1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let march_2 = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert!(ledger.statement_for_date("1", march_1).unwrap().is_empty());
        assert_eq!(ledger.statement_for_date("1", march_2).unwrap().len(), 1);
    }

    #[test]
    fn statement_queries_on_missing_account() {
        let ledger = Ledger::new();
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert!(matches!(
            ledger.statement("404"),
            Err(EngineError::KeyNotFound(_))
        ));
        assert!(matches!(
            ledger.statement_for_date("404", day),
            Err(EngineError::KeyNotFound(_))
        ));
        assert!(matches!(
            ledger.balance("404"),
            Err(EngineError::KeyNotFound(_))
        ));
    }

    #[test]
    fn operations_are_stamped_by_the_clock() {
        let at = utc(2024, 5, 6, 7);
        let mut ledger = ledger_at(vec![at], Tz::UTC);
        ledger.deposit("1", 10, None).unwrap();

        assert_eq!(ledger.statement("1").unwrap()[0].created_at, at);
    }
}
