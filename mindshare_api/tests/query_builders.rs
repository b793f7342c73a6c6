use mindshare_api::{LeaderboardQuery, Query, SortBy, Timeframe};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/api/zama").unwrap()
}

#[test]
fn leaderboard_query_defaults() {
    let url = LeaderboardQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), Some("timeframe=24h&sortBy=mindshare&page=1"));
    assert_eq!(url.path(), "/api/zama");
}

#[test]
fn leaderboard_query_with_timeframe_and_page() {
    let url = LeaderboardQuery::new(Timeframe::Week)
        .with_page(7)
        .with_sort_by(SortBy::Mindshare)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("timeframe=7d"));
    assert!(query.contains("page=7"));
    assert!(query.contains("sortBy=mindshare"));
}

#[test]
fn month_timeframe_uses_month_param() {
    let url = LeaderboardQuery::new(Timeframe::Month).add_to_url(&base_url());
    assert!(url.query().unwrap().contains("timeframe=month"));
}

#[test]
fn timeframe_parsing() {
    assert_eq!("24h".parse::<Timeframe>(), Ok(Timeframe::Day));
    assert_eq!("7D".parse::<Timeframe>(), Ok(Timeframe::Week));
    assert_eq!("30d".parse::<Timeframe>(), Ok(Timeframe::Month));
    assert_eq!("month".parse::<Timeframe>(), Ok(Timeframe::Month));
    assert!("1y".parse::<Timeframe>().is_err());
}

#[test]
fn timeframe_serializes_as_wire_value() {
    let json = serde_json::to_string(&Timeframe::ALL).unwrap();
    assert_eq!(json, r#"["24h","7d","month"]"#);
    assert_eq!(Timeframe::Month.label(), "Last 30 days");
}
