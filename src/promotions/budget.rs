//! Promotion Budget Constraints

/// Budget constraints for a promotion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromotionBudget {
    /// Maximum number of applications (bundles or pairs) per checkout
    pub application_limit: Option<u32>,
}

impl PromotionBudget {
    /// Create a budget with no constraints
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            application_limit: None,
        }
    }

    /// Create a budget with an application limit
    #[must_use]
    pub const fn with_application_limit(limit: u32) -> Self {
        Self {
            application_limit: Some(limit),
        }
    }

    /// Check if this budget has any constraints
    #[must_use]
    pub const fn has_constraints(self) -> bool {
        self.application_limit.is_some()
    }

    /// Clamp a number of possible matches to what the budget allows.
    #[must_use]
    pub fn clamp(self, matches: u32) -> u32 {
        self.application_limit.map_or(matches, |limit| matches.min(limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_budget() {
        let budget = PromotionBudget::unlimited();

        assert!(!budget.has_constraints());
        assert_eq!(budget.clamp(7), 7);
    }

    #[test]
    fn test_application_limit() {
        let budget = PromotionBudget::with_application_limit(2);

        assert!(budget.has_constraints());
        assert_eq!(budget.application_limit, Some(2));
        assert_eq!(budget.clamp(5), 2);
        assert_eq!(budget.clamp(1), 1);
    }

    #[test]
    fn zero_limit_disables_the_promotion() {
        assert_eq!(PromotionBudget::with_application_limit(0).clamp(3), 0);
    }
}
