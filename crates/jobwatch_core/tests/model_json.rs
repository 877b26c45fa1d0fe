use jobwatch_core::{Job, JobsByCompany, Stats, TopJobsResult};
use pretty_assertions::assert_eq;

#[test]
fn jobs_keep_response_key_order() {
    let raw = r#"{
        "Zeta": [{"title": "Z", "link": "https://z.example/1"}],
        "Acme": [{"title": "A", "link": "https://a.example/1", "location": "Remote"}],
        "Beta": []
    }"#;
    let jobs: JobsByCompany = serde_json::from_str(raw).unwrap();
    let order: Vec<&str> = jobs.iter().map(|g| g.company.as_str()).collect();
    assert_eq!(order, vec!["Zeta", "Acme", "Beta"]);
    assert_eq!(jobs.total_jobs(), 2);
    assert_eq!(
        jobs.get("Acme").unwrap()[0].location.as_deref(),
        Some("Remote")
    );
}

#[test]
fn jobs_ignore_unknown_fields_and_accept_null_optionals() {
    let raw = r#"{"Stripe": [{"title": "SRE", "link": "https://s/1", "location": null, "description": "x"}]}"#;
    let jobs: JobsByCompany = serde_json::from_str(raw).unwrap();
    assert_eq!(
        jobs.get("Stripe").unwrap()[0],
        Job {
            title: "SRE".into(),
            link: "https://s/1".into(),
            location: None,
            category: None,
            department: None,
        }
    );
}

#[test]
fn jobs_reject_wrong_shape() {
    assert!(serde_json::from_str::<JobsByCompany>(r#"[1, 2]"#).is_err());
    assert!(serde_json::from_str::<JobsByCompany>(r#"{"Acme": [{"link": "x"}]}"#).is_err());
}

#[test]
fn duplicate_company_replaces_in_place() {
    let mut jobs = JobsByCompany::new();
    jobs.insert("Acme", Vec::new());
    jobs.insert("Beta", Vec::new());
    jobs.insert(
        "Acme",
        vec![Job {
            title: "A".into(),
            link: "l".into(),
            location: None,
            category: None,
            department: None,
        }],
    );
    let order: Vec<&str> = jobs.iter().map(|g| g.company.as_str()).collect();
    assert_eq!(order, vec!["Acme", "Beta"]);
    assert_eq!(jobs.total_jobs(), 1);
}

#[test]
fn jobs_serialize_back_in_order() {
    let raw = r#"{"B":[],"A":[]}"#;
    let jobs: JobsByCompany = serde_json::from_str(raw).unwrap();
    assert_eq!(serde_json::to_string(&jobs).unwrap(), raw);
}

#[test]
fn stats_parse() {
    let raw = r#"{"total_jobs": 42, "companies": 7, "total_scrapes": 3,
                  "scrape_durations_seconds": 12.5, "last_scrape": "N/A"}"#;
    let stats: Stats = serde_json::from_str(raw).unwrap();
    assert_eq!(stats.total_jobs, 42);
    assert_eq!(stats.last_scrape, "N/A");
    assert!(serde_json::from_str::<Stats>(r#"{"total_jobs": 1}"#).is_err());
}

#[test]
fn top_jobs_defaults_missing_lists() {
    let top: TopJobsResult = serde_json::from_str("{}").unwrap();
    assert_eq!(top, TopJobsResult::default());

    let raw = r#"{"count": 1, "keywords": ["devops"], "jobs": [
        {"company": "Stripe", "title": "DevOps", "link": "https://s/1",
         "location": "NYC", "logo": "/logos/stripe.svg", "filters": ["devops"]}]}"#;
    let top: TopJobsResult = serde_json::from_str(raw).unwrap();
    assert_eq!(top.count, Some(1));
    assert_eq!(top.jobs[0].filters, vec!["devops".to_string()]);
}
