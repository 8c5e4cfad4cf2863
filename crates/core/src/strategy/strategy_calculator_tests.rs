#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::goals::RiskProfile;
    use crate::portfolio::{AssetClass, AssetClassMap, Holding};
    use crate::strategy::strategy_calculator::*;
    use crate::strategy::{base_allocation, StrategyError};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn weights(
        equity: Decimal,
        debt: Decimal,
        gold: Decimal,
        cash: Decimal,
    ) -> AssetClassMap<Decimal> {
        AssetClassMap {
            equity,
            debt,
            gold,
            cash,
        }
    }

    // --- Current allocation ---

    #[test]
    fn test_current_allocation_aggregates_by_class() {
        let holdings = vec![
            Holding::new("INFY", AssetClass::Equity, dec!(600)),
            Holding::new("TCS", AssetClass::Equity, dec!(200)),
            Holding::new("LIQ", AssetClass::Debt, dec!(200)),
        ];
        let total = total_value(&holdings).unwrap();
        assert_eq!(total, dec!(1000));

        let allocation = current_allocation(&holdings, total).unwrap();
        assert_eq!(allocation, weights(dec!(0.8), dec!(0.2), dec!(0), dec!(0)));
    }

    #[test]
    fn test_current_allocation_rejects_non_positive_total() {
        let holdings = vec![Holding::new("CASH", AssetClass::Cash, Decimal::ZERO)];
        let result = current_allocation(&holdings, Decimal::ZERO);
        assert!(matches!(
            result,
            Err(Error::Strategy(StrategyError::InvalidPortfolio { .. }))
        ));

        let result = current_allocation(&holdings, dec!(-5));
        assert!(result.is_err());
    }

    #[test]
    fn test_total_value_overflow_is_an_error() {
        let holdings = vec![
            Holding::new("BIG1", AssetClass::Equity, Decimal::MAX),
            Holding::new("BIG2", AssetClass::Debt, Decimal::MAX),
        ];
        assert!(matches!(
            total_value(&holdings),
            Err(Error::Strategy(StrategyError::ValueOverflow))
        ));

        let single = vec![Holding::new("BIG", AssetClass::Equity, Decimal::MAX)];
        assert_eq!(total_value(&single).unwrap(), Decimal::MAX);
    }

    #[test]
    fn test_current_allocation_rejects_negative_holding() {
        let holdings = vec![
            Holding::new("INFY", AssetClass::Equity, dec!(100)),
            Holding::new("LOAN", AssetClass::Debt, dec!(-10)),
        ];
        let total = total_value(&holdings).unwrap();

        match current_allocation(&holdings, total) {
            Err(Error::Strategy(StrategyError::NegativeHolding { symbol })) => {
                assert_eq!(symbol, "LOAN")
            }
            other => panic!("expected NegativeHolding, got {:?}", other),
        }
    }

    // --- Target allocation / glide path ---

    #[test]
    fn test_base_allocations_sum_to_one() {
        for profile in RiskProfile::ALL {
            assert_eq!(base_allocation(profile).total(), Decimal::ONE, "{}", profile);
        }
    }

    #[test]
    fn test_long_horizon_keeps_base_allocation() {
        for profile in RiskProfile::ALL {
            assert_eq!(target_allocation(profile, 8), base_allocation(profile));
            assert_eq!(target_allocation(profile, 30), base_allocation(profile));
        }
    }

    #[test]
    fn test_glide_path_boundaries() {
        // 3 years still gets the near-term shift
        assert_eq!(
            target_allocation(RiskProfile::Growth, 3),
            weights(dec!(0.45), dec!(0.40), dec!(0.10), dec!(0.05))
        );
        // 4 through 7 years get the mid-term shift
        assert_eq!(
            target_allocation(RiskProfile::Growth, 4),
            weights(dec!(0.52), dec!(0.33), dec!(0.10), dec!(0.05))
        );
        assert_eq!(
            target_allocation(RiskProfile::Growth, 7),
            weights(dec!(0.52), dec!(0.33), dec!(0.10), dec!(0.05))
        );
        assert_eq!(
            target_allocation(RiskProfile::Conservative, 0),
            weights(dec!(0.10), dec!(0.70), dec!(0.10), dec!(0.10))
        );
    }

    #[test]
    fn test_glide_path_reduces_equity_for_near_term_goals() {
        let long_term = target_allocation(RiskProfile::Aggressive, 15);
        let near_term = target_allocation(RiskProfile::Aggressive, 2);

        assert!(near_term.equity < long_term.equity);
        assert!(near_term.debt > long_term.debt);
    }

    #[test]
    fn test_glide_path_shift_is_capped_by_equity() {
        assert_eq!(glide_path_shift(1, dec!(0.05)), dec!(0.05));
        assert_eq!(glide_path_shift(5, dec!(0.05)), dec!(0.05));
        assert_eq!(glide_path_shift(1, dec!(0.60)), dec!(0.15));
        assert_eq!(glide_path_shift(5, dec!(0.60)), dec!(0.08));
        assert_eq!(glide_path_shift(8, dec!(0.60)), Decimal::ZERO);
    }

    // --- Rebalancing ---

    #[test]
    fn test_rebalance_amounts_are_signed_and_rounded() {
        let target = weights(dec!(0.6), dec!(0.25), dec!(0.1), dec!(0.05));
        let current = weights(
            dec!(0.5),
            dec!(1) / dec!(3),
            dec!(1) / dec!(12),
            dec!(1) / dec!(12),
        );

        let deltas = rebalance_amounts(&target, &current, dec!(600000));
        assert_eq!(
            deltas,
            weights(dec!(60000), dec!(-50000), dec!(10000), dec!(-20000))
        );
    }

    #[test]
    fn test_rebalance_amounts_round_to_cents() {
        let target = weights(dec!(0.5), dec!(0.5), dec!(0), dec!(0));
        let current = weights(dec!(1) / dec!(3), dec!(2) / dec!(3), dec!(0), dec!(0));

        let deltas = rebalance_amounts(&target, &current, dec!(100));
        assert_eq!(deltas.equity, dec!(16.67));
        assert_eq!(deltas.debt, dec!(-16.67));
    }

    // --- Contribution allocation ---

    #[test]
    fn test_contribution_allocation_favours_underweight_classes() {
        let target = weights(dec!(0.6), dec!(0.25), dec!(0.1), dec!(0.05));
        let current = weights(dec!(0.5), dec!(0.3), dec!(0.05), dec!(0.15));

        let split = contribution_allocation(&target, &current);
        assert_eq!(split.debt, Decimal::ZERO);
        assert_eq!(split.cash, Decimal::ZERO);
        assert_eq!(split.equity, dec!(0.1) / dec!(0.15));
        assert_eq!(split.gold, dec!(0.05) / dec!(0.15));
        assert_eq!(
            underweight_classes(&target, &current),
            vec![AssetClass::Equity, AssetClass::Gold]
        );
    }

    #[test]
    fn test_contribution_allocation_falls_back_to_target_when_balanced() {
        let target = weights(dec!(0.45), dec!(0.35), dec!(0.1), dec!(0.1));
        assert_eq!(contribution_allocation(&target, &target), target);
    }

    // --- Expected return ---

    #[test]
    fn test_expected_annual_return_blends_target() {
        let growth = target_allocation(RiskProfile::Growth, 15);
        assert_eq!(expected_annual_return(&growth), dec!(0.0975));

        let all_cash = weights(dec!(0), dec!(0), dec!(0), dec!(1));
        assert_eq!(expected_annual_return(&all_cash), dec!(0.04));
    }

    // --- Projection ---

    #[test]
    fn test_projection_with_zero_years_returns_current_value() {
        let projected =
            project_future_value(dec!(600000), 0, dec!(0.0975), dec!(25000)).unwrap();
        assert_eq!(projected, dec!(600000));
    }

    #[test]
    fn test_projection_with_zero_rate_sums_contributions() {
        let projected = project_future_value(dec!(1000), 10, Decimal::ZERO, dec!(250)).unwrap();
        assert_eq!(projected, dec!(1000) + dec!(250) * dec!(120));
    }

    #[test]
    fn test_projection_compounds_monthly() {
        // 1200 at 12%/yr for one year: 1200 * 1.01^12
        let projected = project_future_value(dec!(1200), 1, dec!(0.12), Decimal::ZERO).unwrap();
        assert_eq!(projected.round_dp(4), dec!(1352.1900));

        // 100/month at 12%/yr for one year: 100 * (1.01^12 - 1) / 0.01
        let projected = project_future_value(Decimal::ZERO, 1, dec!(0.12), dec!(100)).unwrap();
        assert_eq!(projected.round_dp(4), dec!(1268.2503));
    }

    #[test]
    fn test_projection_overflow_is_an_error() {
        let result = project_future_value(dec!(1000000), 4000, dec!(0.12), dec!(1000));
        assert!(matches!(
            result,
            Err(Error::Strategy(StrategyError::ProjectionOverflow { years: 4000 }))
        ));
    }

    #[test]
    fn test_display_pct_rounds_to_two_places() {
        assert_eq!(to_display_pct(dec!(1) / dec!(3)), dec!(33.33));
        assert_eq!(to_display_pct(dec!(0.0975)), dec!(9.75));
    }
}
