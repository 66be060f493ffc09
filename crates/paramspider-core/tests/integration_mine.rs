//! Integration test: the curl client against a local CDX stand-in, through the full mining run.

mod common;

use common::cdx_server::{self, Route};
use paramspider_core::archive::{ArchiveSource, FetchError, WaybackClient};
use paramspider_core::config::ParamSpiderConfig;
use paramspider_core::domains::parse_domain_list;
use paramspider_core::miner;
use paramspider_core::output::OutputSink;
use paramspider_core::url_clean::{CleanRules, Normalizer};
use std::fs;
use tempfile::tempdir;

fn client_for(server: &cdx_server::CdxServer) -> WaybackClient {
    let mut cfg = ParamSpiderConfig::default();
    cfg.endpoint = server.endpoint();
    cfg.connect_timeout_secs = 5;
    cfg.timeout_secs = 10;
    WaybackClient::from_config(&cfg, None)
}

#[test]
fn fetch_returns_body_and_substitutes_domain() {
    let server = cdx_server::start(vec![Route::ok(
        "url=example.com/",
        "https://example.com/a?x=1\n",
    )]);
    let client = client_for(&server);

    let body = client.fetch_urls("example.com").unwrap();
    assert_eq!(body, "https://example.com/a?x=1\n");
    assert_eq!(
        server.requests(),
        vec!["/cdx/search/cdx?url=example.com/*&output=txt".to_string()]
    );
}

#[test]
fn non_success_status_is_http_error() {
    let server = cdx_server::start(vec![Route::status("url=down.com/", 503)]);
    let client = client_for(&server);
    match client.fetch_urls("down.com") {
        Err(FetchError::Http { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[test]
fn list_run_cleans_filters_and_appends() {
    let server = cdx_server::start(vec![
        Route::ok(
            "url=a.com/",
            "https://a.com:443/page?a=1&b=2\n\
             https://a.com/logo.png?x=1\n\
             https://a.com/\n\
             http://a.com:80/search?q=shoes&q=boots\n\
             http://a.com/search?q=hats\n",
        ),
        Route::status("url=b.com/", 500),
        Route::ok("url=c.com/", "http://c.com/item?id=9&ref=home\n"),
    ]);
    let client = client_for(&server);

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("results.txt");
    fs::write(&out_path, "from an earlier run\n").unwrap();
    let sink = OutputSink::new(&out_path, true);
    let normalizer = Normalizer::new(CleanRules::default());

    let domains = parse_domain_list("HTTPS://C.com\nb.com\n\nhttp://A.COM\na.com\n");
    assert_eq!(domains, vec!["a.com", "b.com", "c.com"]);

    let mut echo = Vec::new();
    let summary = miner::run(&client, &normalizer, &sink, &domains, &mut echo).unwrap();

    assert_eq!(summary.domains, 3);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.written, 3);

    let expected = "https://a.com/page?a=FUZZ&b=FUZZ\n\
                    http://a.com/search?q=FUZZ\n\
                    http://c.com/item?id=FUZZ&ref=FUZZ\n";
    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        format!("from an earlier run\n{expected}")
    );
    assert_eq!(String::from_utf8(echo).unwrap(), expected);
    assert_eq!(server.requests().len(), 3);
}

#[test]
fn custom_placeholder_end_to_end() {
    let server = cdx_server::start(vec![Route::ok("url=x.com/", "https://x.com/p?token=abc\n")]);
    let client = client_for(&server);
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("out.txt");
    let sink = OutputSink::new(&out_path, false);
    let normalizer = Normalizer::new(CleanRules::from_config(
        &ParamSpiderConfig::default(),
        Some("INJECT"),
    ));

    let report =
        miner::process_domain(&client, &normalizer, &sink, "x.com", &mut std::io::sink()).unwrap();

    assert_eq!(report.written, 1);
    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        "https://x.com/p?token=INJECT\n"
    );
}
