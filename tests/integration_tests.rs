// Integration tests for the Job Radar matching pipeline

use chrono::Utc;
use job_radar::core::Matcher;
use job_radar::models::{JobPosting, PreferenceSpec};

fn posting(id: &str, title: &str, team: &str, location: &str) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        company: "Test Co".to_string(),
        title: title.to_string(),
        team: team.to_string(),
        location: location.to_string(),
        snippet: String::new(),
        url: format!("https://jobs.test.example/{}", id),
        posted: Utc::now(),
    }
}

fn preferences() -> PreferenceSpec {
    PreferenceSpec {
        looking_for: "distributed systems\nbackend infrastructure\nstaff engineer".to_string(),
        not_looking_for: "recruiter\nproduct manager".to_string(),
    }
}

#[test]
fn test_end_to_end_matching() {
    let matcher = Matcher::with_default_policy();

    let mut malformed = posting("bad-url", "Staff Distributed Systems Engineer", "", "Remote");
    malformed.url = "not a url".to_string();

    let candidates = vec![
        posting("1", "Staff Software Engineer, Distributed Systems", "Platform", "Remote"),
        posting("2", "Backend Engineer", "Infrastructure", "Remote"),
        posting("3", "Marketing Manager", "Growth", "Remote"),
        posting("4", "Staff Distributed Systems Lead", "Platform", "Remote"),
        malformed,
        posting("1", "Staff Software Engineer, Distributed Systems", "Platform", "Remote"),
    ];

    let outcome = matcher.match_postings(&preferences(), candidates);

    assert_eq!(outcome.total_scraped, 6);
    // Marketing is disqualified, the Lead title fails the role-type gate,
    // the malformed record is dropped and the duplicate id collapses.
    let ids: Vec<&str> = outcome.jobs.iter().map(|j| j.posting.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(outcome.total_matched, 2);

    // Sorted by score descending.
    assert!(outcome.jobs[0].match_score >= outcome.jobs[1].match_score);
    for job in &outcome.jobs {
        assert!(job.matched);
        assert!(job.match_score >= 0.0 && job.match_score <= 1.0);
    }
}

#[test]
fn test_negative_preferences_flow_through_pipeline() {
    let matcher = Matcher::with_default_policy();

    let candidates = vec![
        posting("1", "Staff Software Engineer", "Platform", "Remote"),
        // "product manager" appears in the team text: negative phrase.
        posting("2", "Staff Software Engineer", "Product Manager Tools", "Remote"),
    ];

    let outcome = matcher.match_postings(&preferences(), candidates);

    assert_eq!(outcome.total_matched, 1);
    assert_eq!(outcome.jobs[0].posting.id, "1");
}

#[test]
fn test_scored_posting_wire_shape() {
    let matcher = Matcher::with_default_policy();
    let outcome = matcher.match_postings(
        &preferences(),
        vec![posting("1", "Staff Software Engineer, Distributed Systems", "Platform", "Remote")],
    );

    let json = serde_json::to_value(&outcome.jobs[0]).unwrap();
    assert_eq!(json["id"], "1");
    assert_eq!(json["company"], "Test Co");
    assert_eq!(json["matched"], true);
    assert!(json["matchScore"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_empty_batch_yields_empty_outcome() {
    let matcher = Matcher::with_default_policy();
    let outcome = matcher.match_postings(&PreferenceSpec::default(), vec![]);

    assert_eq!(outcome.total_scraped, 0);
    assert_eq!(outcome.total_matched, 0);
    assert!(outcome.jobs.is_empty());
}
