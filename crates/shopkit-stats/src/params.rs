//! Stats route parameter values.

use serde::{Deserialize, Serialize};

/// Which report the stats page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatsType {
    #[default]
    Orders,
    Customers,
    Stock,
    Taxes,
    Coupons,
    Subscriptions,
}

impl StatsType {
    /// Types that can be requested through the stats route.
    pub const ROUTABLE: [StatsType; 3] = [
        StatsType::Orders,
        StatsType::Customers,
        StatsType::Stock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatsType::Orders => "orders",
            StatsType::Customers => "customers",
            StatsType::Stock => "stock",
            StatsType::Taxes => "taxes",
            StatsType::Coupons => "coupons",
            StatsType::Subscriptions => "subscriptions",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "orders" => Some(StatsType::Orders),
            "customers" => Some(StatsType::Customers),
            "stock" => Some(StatsType::Stock),
            "taxes" => Some(StatsType::Taxes),
            "coupons" => Some(StatsType::Coupons),
            "subscriptions" => Some(StatsType::Subscriptions),
            _ => None,
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            StatsType::Orders => "Orders",
            StatsType::Customers => "Customers",
            StatsType::Stock => "Stock",
            StatsType::Taxes => "Taxes",
            StatsType::Coupons => "Coupons",
            StatsType::Subscriptions => "Subscriptions",
        }
    }

    /// Check if the stats route accepts this type.
    pub fn is_routable(&self) -> bool {
        Self::ROUTABLE.contains(self)
    }
}

/// Reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StatsPeriod {
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "last_month")]
    LastMonth,
    #[default]
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "7day")]
    SevenDay,
    #[serde(rename = "custom")]
    Custom,
}

impl StatsPeriod {
    pub const ALL: [StatsPeriod; 5] = [
        StatsPeriod::Year,
        StatsPeriod::LastMonth,
        StatsPeriod::Month,
        StatsPeriod::SevenDay,
        StatsPeriod::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatsPeriod::Year => "year",
            StatsPeriod::LastMonth => "last_month",
            StatsPeriod::Month => "month",
            StatsPeriod::SevenDay => "7day",
            StatsPeriod::Custom => "custom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|period| period.as_str() == s)
    }
}

/// How report rows are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatsSegment {
    #[default]
    SalesByDate,
    SalesByProduct,
    SalesByCategory,
    CouponUsage,
}

impl StatsSegment {
    pub const ALL: [StatsSegment; 4] = [
        StatsSegment::SalesByDate,
        StatsSegment::SalesByProduct,
        StatsSegment::SalesByCategory,
        StatsSegment::CouponUsage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatsSegment::SalesByDate => "sales_by_date",
            StatsSegment::SalesByProduct => "sales_by_product",
            StatsSegment::SalesByCategory => "sales_by_category",
            StatsSegment::CouponUsage => "coupon_usage",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|segment| segment.as_str() == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_round_trip() {
        for ty in [
            StatsType::Orders,
            StatsType::Customers,
            StatsType::Stock,
            StatsType::Taxes,
            StatsType::Coupons,
            StatsType::Subscriptions,
        ] {
            assert_eq!(StatsType::from_str(ty.as_str()), Some(ty));
        }
        assert_eq!(StatsType::from_str("refunds"), None);
    }

    #[test]
    fn test_routable_types() {
        assert!(StatsType::Orders.is_routable());
        assert!(StatsType::Stock.is_routable());
        assert!(!StatsType::Taxes.is_routable());
        assert!(!StatsType::Subscriptions.is_routable());
    }

    #[test]
    fn test_period_parsing() {
        assert_eq!(StatsPeriod::from_str("7day"), Some(StatsPeriod::SevenDay));
        assert_eq!(StatsPeriod::from_str("last_month"), Some(StatsPeriod::LastMonth));
        assert_eq!(StatsPeriod::from_str("week"), None);
    }

    #[test]
    fn test_segment_parsing() {
        assert_eq!(
            StatsSegment::from_str("coupon_usage"),
            Some(StatsSegment::CouponUsage)
        );
        assert_eq!(StatsSegment::from_str("Sales_By_Date"), None);
    }

    #[test]
    fn test_serde_names_match_route_values() {
        let json = serde_json::to_string(&StatsPeriod::SevenDay).unwrap();
        assert_eq!(json, r#""7day""#);
        let json = serde_json::to_string(&StatsSegment::SalesByCategory).unwrap();
        assert_eq!(json, r#""sales_by_category""#);
    }
}
