//! Stats route resolution.
//!
//! `/store/stats/:type/:period/:segment?start_date=..&end_date=..`

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::params::{StatsPeriod, StatsSegment, StatsType};

/// Where invalid stats routes are sent.
pub const STATS_ROOT: &str = "/store/stats";

/// Date format accepted in the query string.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Extracted route parameters (e.g., `:type` from `/store/stats/:type`).
pub type RouteParams = HashMap<String, String>;

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// Props handed to the stats page once the route is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsProps {
    #[serde(rename = "type")]
    pub stats_type: StatsType,
    pub period: StatsPeriod,
    pub segment: StatsSegment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Outcome of resolving a stats route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResolution {
    /// Render the stats page with these props.
    Render(StatsProps),
    /// Send the user elsewhere.
    Redirect(String),
}

impl RouteResolution {
    pub fn is_redirect(&self) -> bool {
        matches!(self, RouteResolution::Redirect(_))
    }
}

/// The store stats route.
pub struct StatsRoute;

impl StatsRoute {
    /// Validate the path parameters, reporting the first bad one.
    pub fn validate(
        params: &RouteParams,
    ) -> Result<(StatsType, StatsPeriod, StatsSegment), StatsError> {
        let stats_type = required(params, "type")?;
        let stats_type = StatsType::from_str(stats_type)
            .filter(StatsType::is_routable)
            .ok_or_else(|| invalid("type", stats_type))?;

        let period = required(params, "period")?;
        let period = StatsPeriod::from_str(period).ok_or_else(|| invalid("period", period))?;

        let segment = required(params, "segment")?;
        let segment =
            StatsSegment::from_str(segment).ok_or_else(|| invalid("segment", segment))?;

        Ok((stats_type, period, segment))
    }

    /// Resolve a request into page props, or a redirect to the stats root.
    pub fn resolve(params: &RouteParams, query: &QueryParams) -> RouteResolution {
        match Self::validate(params) {
            Ok((stats_type, period, segment)) => RouteResolution::Render(StatsProps {
                stats_type,
                period,
                segment,
                start_date: query_date(query, "start_date"),
                end_date: query_date(query, "end_date"),
            }),
            Err(e) => {
                tracing::debug!(error = %e, "redirecting stats route");
                RouteResolution::Redirect(STATS_ROOT.to_string())
            }
        }
    }
}

fn required<'a>(params: &'a RouteParams, name: &'static str) -> Result<&'a str, StatsError> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or(StatsError::MissingParameter(name))
}

fn invalid(name: &'static str, value: &str) -> StatsError {
    StatsError::InvalidParameter {
        name,
        value: value.to_string(),
    }
}

fn query_date(query: &QueryParams, key: &str) -> Option<NaiveDate> {
    let raw = query.get(key)?;
    match NaiveDate::parse_from_str(raw, QUERY_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "ignoring malformed stats date");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(ty: &str, period: &str, segment: &str) -> RouteParams {
        HashMap::from([
            ("type".to_string(), ty.to_string()),
            ("period".to_string(), period.to_string()),
            ("segment".to_string(), segment.to_string()),
        ])
    }

    #[test]
    fn test_valid_route_renders() {
        let resolution = StatsRoute::resolve(
            &params("orders", "month", "sales_by_date"),
            &QueryParams::new(),
        );

        assert_eq!(
            resolution,
            RouteResolution::Render(StatsProps {
                stats_type: StatsType::Orders,
                period: StatsPeriod::Month,
                segment: StatsSegment::SalesByDate,
                start_date: None,
                end_date: None,
            })
        );
    }

    #[test]
    fn test_invalid_type_redirects() {
        let resolution = StatsRoute::resolve(
            &params("taxes", "month", "sales_by_date"),
            &QueryParams::new(),
        );
        assert_eq!(resolution, RouteResolution::Redirect("/store/stats".into()));
    }

    #[test]
    fn test_missing_parameter_reported() {
        let mut p = params("stock", "year", "coupon_usage");
        p.remove("period");

        assert_eq!(
            StatsRoute::validate(&p),
            Err(StatsError::MissingParameter("period"))
        );
        assert!(StatsRoute::resolve(&p, &QueryParams::new()).is_redirect());
    }

    #[test]
    fn test_invalid_segment_reported() {
        let err = StatsRoute::validate(&params("customers", "7day", "by_region")).unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidParameter {
                name: "segment",
                value: "by_region".into()
            }
        );
    }

    #[test]
    fn test_query_dates_parsed() {
        let query = HashMap::from([
            ("start_date".to_string(), "2017-03-01".to_string()),
            ("end_date".to_string(), "2017-03-31".to_string()),
        ]);
        let resolution =
            StatsRoute::resolve(&params("orders", "custom", "sales_by_product"), &query);

        let RouteResolution::Render(props) = resolution else {
            panic!("expected render");
        };
        assert_eq!(props.start_date, NaiveDate::from_ymd_opt(2017, 3, 1));
        assert_eq!(props.end_date, NaiveDate::from_ymd_opt(2017, 3, 31));
    }

    #[test]
    fn test_malformed_query_date_dropped() {
        let query = HashMap::from([("start_date".to_string(), "03/01/2017".to_string())]);
        let resolution =
            StatsRoute::resolve(&params("orders", "custom", "sales_by_product"), &query);

        let RouteResolution::Render(props) = resolution else {
            panic!("expected render");
        };
        assert_eq!(props.start_date, None);
    }
}
