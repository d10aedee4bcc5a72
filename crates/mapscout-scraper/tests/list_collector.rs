mod support;

use mapscout_core::SummaryRecord;
use mapscout_scraper::{collect_listings, search_url};
use support::{fast_settings, FakeBrowser, FakeElement, FakePage};

const FEED: &str = "div[role='feed']";
const ITEM: &str = "div[role='article']";

fn card(name: &str, href: &str, rating: &str, reviews: &str) -> FakeElement {
    FakeElement::new("")
        .child(".qBF1Pd", FakeElement::new(name))
        .child("a.hfpxzc", FakeElement::new("").attr("href", href))
        .child(".MW4etd", FakeElement::new(rating))
        .child(".UY7F9", FakeElement::new(reviews))
}

fn results_page(cards: Vec<FakeElement>) -> FakePage {
    FakePage::new()
        .with(FEED, FakeElement::new(""))
        .with_all(ITEM, cards)
}

#[tokio::test]
async fn reads_every_card_in_feed_order() {
    let url = search_url("restaurants in new york", "en-US");
    let browser = FakeBrowser::new().heights(&[500]).page(
        &url,
        results_page(vec![
            card("Joe's Pizza", "https://maps.example/joes", "4.6", "(12,408)"),
            card("Katz's Delicatessen", "https://maps.example/katz", "4.5", "(31,002)"),
        ]),
    );

    let records = collect_listings(&browser, "restaurants in new york", &fast_settings()).await;

    assert_eq!(
        records,
        vec![
            SummaryRecord {
                name: Some("Joe's Pizza".to_owned()),
                url: Some("https://maps.example/joes".to_owned()),
                rating: Some("4.6".to_owned()),
                reviews_count: Some("12,408".to_owned()),
            },
            SummaryRecord {
                name: Some("Katz's Delicatessen".to_owned()),
                url: Some("https://maps.example/katz".to_owned()),
                rating: Some("4.5".to_owned()),
                reviews_count: Some("31,002".to_owned()),
            },
        ]
    );
    assert_eq!(*browser.visited.borrow(), vec![url]);
}

#[tokio::test]
async fn missing_fields_are_absent_not_fatal() {
    let url = search_url("bars in berlin", "de-DE");
    let sparse = FakeElement::new("").child(".qBF1Pd", FakeElement::new("  Kneipe  "));
    let browser = FakeBrowser::new().page(&url, results_page(vec![sparse]));

    let records = collect_listings(&browser, "bars in berlin", &fast_settings()).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name.as_deref(), Some("Kneipe"));
    assert_eq!(records[0].url, None);
    assert_eq!(records[0].rating, None);
    assert_eq!(records[0].reviews_count, None);
}

#[tokio::test]
async fn failed_field_lookup_does_not_drop_the_card() {
    let url = search_url("restaurants in new york", "en-US");
    let flaky =
        card("Balthazar", "https://maps.example/balthazar", "4.4", "(9,120)").broken(".MW4etd");
    let browser = FakeBrowser::new().page(&url, results_page(vec![flaky]));

    let records = collect_listings(&browser, "restaurants in new york", &fast_settings()).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rating, None);
    assert_eq!(records[0].reviews_count.as_deref(), Some("9,120"));
}

#[tokio::test]
async fn stale_card_is_skipped() {
    let url = search_url("restaurants in new york", "en-US");
    let browser = FakeBrowser::new().page(
        &url,
        results_page(vec![
            card("Gone", "https://maps.example/gone", "4.0", "(1)").stale(),
            card("Still Here", "https://maps.example/here", "4.1", "(2)"),
        ]),
    );

    let records = collect_listings(&browser, "restaurants in new york", &fast_settings()).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name.as_deref(), Some("Still Here"));
}

#[tokio::test]
async fn missing_feed_yields_nothing() {
    let browser = FakeBrowser::new();

    let records = collect_listings(&browser, "restaurants in nowhere", &fast_settings()).await;

    assert!(records.is_empty());
}

#[tokio::test]
async fn unreachable_search_yields_nothing() {
    let url = search_url("restaurants in new york", "en-US");
    let browser = FakeBrowser::new().unreachable(&url);

    let records = collect_listings(&browser, "restaurants in new york", &fast_settings()).await;

    assert!(records.is_empty());
}

#[tokio::test]
async fn empty_feed_yields_nothing() {
    let url = search_url("sushi in paris", "fr-FR");
    let browser = FakeBrowser::new().page(&url, results_page(Vec::new()));

    let records = collect_listings(&browser, "sushi in paris", &fast_settings()).await;

    assert!(records.is_empty());
}

#[tokio::test]
async fn search_uses_locale_of_the_queried_city() {
    let browser = FakeBrowser::new();

    collect_listings(&browser, "Restaurants in Tokyo", &fast_settings()).await;

    let visited = browser.visited.borrow();
    assert_eq!(visited.len(), 1);
    assert!(visited[0].ends_with("?hl=ja"), "got {}", visited[0]);
    assert!(visited[0].contains("Restaurants+in+Tokyo"));
}
