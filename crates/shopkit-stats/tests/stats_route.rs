//! Resolving stats requests end to end.

use std::collections::HashMap;

use shopkit_stats::{
    QueryParams, RouteParams, RouteResolution, StatsNavigation, StatsPeriod, StatsRoute,
    StatsSegment, StatsType, STATS_ROOT,
};

fn route(ty: &str, period: &str, segment: &str) -> RouteParams {
    HashMap::from([
        ("type".to_string(), ty.to_string()),
        ("period".to_string(), period.to_string()),
        ("segment".to_string(), segment.to_string()),
    ])
}

#[test]
fn test_every_valid_combination_renders() {
    for ty in StatsType::ROUTABLE {
        for period in StatsPeriod::ALL {
            for segment in StatsSegment::ALL {
                let resolution = StatsRoute::resolve(
                    &route(ty.as_str(), period.as_str(), segment.as_str()),
                    &QueryParams::new(),
                );
                assert!(!resolution.is_redirect(), "{:?}/{:?}/{:?}", ty, period, segment);
            }
        }
    }
}

#[test]
fn test_empty_params_redirect_to_root() {
    let resolution = StatsRoute::resolve(&RouteParams::new(), &QueryParams::new());
    assert_eq!(resolution, RouteResolution::Redirect(STATS_ROOT.to_string()));
}

#[test]
fn test_props_serialize_for_page() {
    let query = HashMap::from([("start_date".to_string(), "2017-01-01".to_string())]);
    let RouteResolution::Render(props) =
        StatsRoute::resolve(&route("customers", "year", "sales_by_category"), &query)
    else {
        panic!("expected render");
    };

    let json = serde_json::to_value(&props).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "customers",
            "period": "year",
            "segment": "sales_by_category",
            "start_date": "2017-01-01"
        })
    );

    let nav = StatsNavigation::new(props.stats_type, "example.com");
    assert_eq!(nav.selected_tab().map(|t| t.label), Some("Customers"));
}
