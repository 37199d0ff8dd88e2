// tests/pipeline_e2e.rs
mod common;

use common::*;

use ggj_scrape::config::options::PipelineOptions;
use ggj_scrape::data::{fields, GameRecord};
use ggj_scrape::error::{Error, ParseError};
use ggj_scrape::progress::NullProgress;
use ggj_scrape::scrape::pipeline::{self, PipelineSummary};
use ggj_scrape::scrape::{JamSiteCache, SiteState};

const SITES: [(&str, &str); 3] = [("lyon", "France"), ("tokyo", "Japan"), ("nairobi", "Kenya")];

fn opts(batch_size: usize) -> PipelineOptions {
    PipelineOptions { batch_size, ..Default::default() }
}

/// `n` games spread over the three sites, every site page present.
fn site_with_games(n: usize) -> FakeSite {
    let mut fake = FakeSite::new();
    for i in 0..n {
        let (slug, _) = SITES[i % SITES.len()];
        fake = fake.page(game_url(i), game_page(&format!("Game {i}"), slug, "Godot Engine, Blender", "2D"));
    }
    for (slug, country) in SITES {
        fake = fake.page(site_url(slug), site_page(country));
    }
    fake
}

fn urls(n: usize) -> Vec<String> {
    (0..n).map(game_url).collect()
}

#[tokio::test]
async fn one_hundred_fifty_urls_two_batches_one_dropped() {
    let fake = site_with_games(150).status(game_url(17), 500);
    let cache = JamSiteCache::new();

    let run = pipeline::run(&fake, &urls(150), &opts(100), &cache, &mut NullProgress).await.unwrap();

    assert_eq!(run.records.len(), 149);
    assert_eq!(
        run.summary,
        PipelineSummary {
            urls: 150,
            batches: 2,
            records: 149,
            dropped: 1,
            site_batches: 2,
            site_fetches: 3,
            sites_resolved: 3,
            sites_failed: 0,
        }
    );
    for (slug, _) in SITES {
        assert_eq!(fake.hits(&site_url(slug)), 1, "{slug} fetched more than once");
    }
}

#[tokio::test]
async fn records_sharing_a_site_share_its_country() {
    let fake = site_with_games(30);
    let cache = JamSiteCache::new();

    let run = pipeline::run(&fake, &urls(30), &opts(7), &cache, &mut NullProgress).await.unwrap();

    for rec in &run.records {
        let url = rec.jam_site_url().unwrap();
        let (_, country) = SITES.iter().find(|(slug, _)| site_url(slug) == url).unwrap();
        assert_eq!(rec.jam_site_country(), Some(*country));
        assert_eq!(rec.names().last(), Some(fields::JAM_SITE_COUNTRY));
    }
    assert_eq!(cache.len(), 3);
}

#[tokio::test]
async fn records_keep_input_order() {
    let fake = site_with_games(12);
    let cache = JamSiteCache::new();

    let run = pipeline::run(&fake, &urls(12), &opts(5), &cache, &mut NullProgress).await.unwrap();

    let titles: Vec<String> = run.records.iter().map(|r| r.text(fields::DESCRIPTION).unwrap().to_string()).collect();
    let expected: Vec<String> = (0..12).map(|i| format!("<p>Game {i}</p>")).collect();
    assert_eq!(titles, expected);
}

#[tokio::test]
async fn seeded_cache_issues_no_site_requests() {
    let fake = FakeSite::new();
    let cache = JamSiteCache::with_resolved(SITES.iter().map(|(slug, country)| (site_url(slug), *country)));

    let mut records: Vec<GameRecord> = (0..9)
        .map(|i| {
            let mut rec = GameRecord::new();
            rec.insert(fields::JAM_SITE, SITES[i % 3].0);
            rec.insert(fields::JAM_SITE_URL, site_url(SITES[i % 3].0));
            rec
        })
        .collect();

    let mut summary = PipelineSummary::default();
    pipeline::resolve_countries(&fake, &records, &cache, 4, &mut NullProgress, &mut summary).await;
    pipeline::merge_countries(&mut records, &cache);

    assert_eq!(fake.total_hits(), 0);
    assert_eq!(summary.site_fetches, 0);
    assert_eq!(summary.site_batches, 3);
    assert!(records.iter().all(|r| r.jam_site_country().is_some()));
}

#[tokio::test]
async fn failed_jam_site_is_not_fatal() {
    let fake = site_with_games(6)
        .status(site_url("tokyo"), 503)
        .page(site_url("nairobi"), "<html><body><p>moved</p></body></html>");
    let cache = JamSiteCache::new();

    let run = pipeline::run(&fake, &urls(6), &opts(100), &cache, &mut NullProgress).await.unwrap();

    assert_eq!(run.records.len(), 6);
    assert_eq!(run.summary.sites_resolved, 1);
    assert_eq!(run.summary.sites_failed, 2);
    assert_eq!(cache.state(&site_url("tokyo")), Some(SiteState::Failed));
    assert_eq!(cache.state(&site_url("nairobi")), Some(SiteState::Failed));

    let with_country = run.records.iter().filter(|r| r.jam_site_country().is_some()).count();
    assert_eq!(with_country, 2);
}

#[tokio::test]
async fn unparsable_detail_page_aborts_the_run() {
    let fake = site_with_games(4).page(game_url(2), "<html><body><div class=\"field\"></div></body></html>");
    let cache = JamSiteCache::new();

    let err = pipeline::run(&fake, &urls(4), &opts(100), &cache, &mut NullProgress).await.unwrap_err();

    match err {
        Error::Parse { url, source } => {
            assert_eq!(url, game_url(2));
            assert_eq!(source, ParseError::MissingArticle);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(cache.is_empty());
}

#[tokio::test]
async fn in_flight_requests_stay_within_a_batch() {
    let fake = site_with_games(35);
    let cache = JamSiteCache::new();

    let run = pipeline::run(&fake, &urls(35), &opts(10), &cache, &mut NullProgress).await.unwrap();

    assert_eq!(run.summary.batches, 4);
    assert!(fake.max_in_flight() <= 10, "max in flight {}", fake.max_in_flight());
    assert!(fake.max_in_flight() >= 2, "batch was not concurrent");
}

#[tokio::test]
async fn zero_batch_size_is_rejected_before_any_request() {
    let fake = site_with_games(3);
    let cache = JamSiteCache::new();

    let err = pipeline::run(&fake, &urls(3), &opts(0), &cache, &mut NullProgress).await.unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert_eq!(fake.total_hits(), 0);
}
