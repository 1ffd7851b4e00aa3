// budget arithmetic for the funnel split

use crate::error::StrategyError;
use crate::models::{BudgetAllocation, BudgetPeriod, BudgetPlan};

/// Share of the total budget given to one funnel stage, in whole percent.
#[derive(Debug, Clone, Copy)]
pub struct Allocation {
    pub stage: &'static str,
    pub percent: u64,
    pub description: &'static str,
}

pub const ALLOCATIONS: [Allocation; 3] = [
    Allocation {
        stage: "TOFU (Awareness)",
        percent: 50,
        description: "Build brand awareness and reach new audiences",
    },
    Allocation {
        stage: "MOFU (Consideration)",
        percent: 30,
        description: "Engage interested prospects and build trust",
    },
    Allocation {
        stage: "BOFU (Conversion)",
        percent: 20,
        description: "Convert qualified leads into customers",
    },
];

const DAYS_PER_WEEK: u64 = 7;
const DAYS_PER_MONTH: u64 = 30;

/// Total spend over one budget period.
pub fn total_budget(amount: u64, period: BudgetPeriod) -> Result<u64, StrategyError> {
    checked_product(amount, period.multiplier())
}

/// round(total * percent / 100), halves rounded up
pub fn allocate(total: u64, percent: u64) -> Result<u64, StrategyError> {
    let scaled = checked_product(total, percent)?;
    Ok(scaled / 100 + u64::from(scaled % 100 >= 50))
}

pub fn plan(amount: u64, period: BudgetPeriod) -> Result<BudgetPlan, StrategyError> {
    let total = total_budget(amount, period)?;
    let weekly = checked_product(amount, DAYS_PER_WEEK)?;
    let monthly = checked_product(amount, DAYS_PER_MONTH)?;

    let breakdown = ALLOCATIONS
        .iter()
        .map(|allocation| {
            Ok(BudgetAllocation {
                stage: allocation.stage.to_string(),
                amount: allocate(total, allocation.percent)?.to_string(),
                percentage: allocation.percent.to_string(),
                description: allocation.description.to_string(),
            })
        })
        .collect::<Result<Vec<_>, StrategyError>>()?;

    Ok(BudgetPlan {
        total: total.to_string(),
        weekly: weekly.to_string(),
        monthly: monthly.to_string(),
        breakdown,
    })
}

fn checked_product(amount: u64, factor: u64) -> Result<u64, StrategyError> {
    amount
        .checked_mul(factor)
        .ok_or_else(|| StrategyError::validation("budgetAmount", "is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn amounts(plan: &BudgetPlan) -> Vec<&str> {
        plan.breakdown.iter().map(|row| row.amount.as_str()).collect()
    }

    #[test]
    fn allocations_cover_the_whole_budget() {
        let sum: u64 = ALLOCATIONS.iter().map(|a| a.percent).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn daily_budget_plan() {
        let plan = plan(1000, BudgetPeriod::Daily).unwrap();
        assert_eq!(plan.total, "1000");
        assert_eq!(plan.weekly, "7000");
        assert_eq!(plan.monthly, "30000");
        assert_eq!(amounts(&plan), vec!["500", "300", "200"]);
        let percentages: Vec<&str> = plan.breakdown.iter().map(|r| r.percentage.as_str()).collect();
        assert_eq!(percentages, vec!["50", "30", "20"]);
    }

    #[test]
    fn period_multipliers_scale_the_total() {
        assert_eq!(total_budget(100, BudgetPeriod::Daily).unwrap(), 100);
        assert_eq!(total_budget(100, BudgetPeriod::Weekly).unwrap(), 700);
        assert_eq!(total_budget(100, BudgetPeriod::Monthly).unwrap(), 3000);

        let plan = plan(500, BudgetPeriod::Weekly).unwrap();
        assert_eq!(plan.total, "3500");
        assert_eq!(amounts(&plan), vec!["1750", "1050", "700"]);
    }

    #[test]
    fn each_stage_rounds_independently() {
        // 5 * 0.5 = 2.5, 5 * 0.3 = 1.5, 5 * 0.2 = 1
        let plan = plan(5, BudgetPeriod::Daily).unwrap();
        assert_eq!(amounts(&plan), vec!["3", "2", "1"]);

        assert_eq!(allocate(1, 30).unwrap(), 0);
        assert_eq!(allocate(7, 30).unwrap(), 2);
        assert_eq!(allocate(3, 50).unwrap(), 2);
    }

    fn any_period() -> impl Strategy<Value = BudgetPeriod> {
        prop_oneof![
            Just(BudgetPeriod::Daily),
            Just(BudgetPeriod::Weekly),
            Just(BudgetPeriod::Monthly),
        ]
    }

    proptest! {
        #[test]
        fn plan_holds_for_any_budget(amount in 1u64..=10_000_000_000, period in any_period()) {
            let plan = plan(amount, period).unwrap();
            let total = amount * period.multiplier();

            prop_assert_eq!(&plan.total, &total.to_string());
            prop_assert_eq!(&plan.weekly, &(amount * 7).to_string());
            prop_assert_eq!(&plan.monthly, &(amount * 30).to_string());
            prop_assert_eq!(plan.breakdown.len(), 3);

            for (row, percent) in plan.breakdown.iter().zip([50u64, 30, 20]) {
                // round(total * percent / 100), halves up
                let expected = (total * percent * 2 + 100) / 200;
                prop_assert_eq!(&row.amount, &expected.to_string());
                prop_assert_eq!(&row.percentage, &percent.to_string());
            }
        }
    }

    #[test]
    fn overflow_is_a_validation_error() {
        let err = plan(u64::MAX / 2, BudgetPeriod::Monthly).unwrap_err();
        assert!(matches!(err, StrategyError::Validation { ref field, .. } if field == "budgetAmount"));
    }
}
