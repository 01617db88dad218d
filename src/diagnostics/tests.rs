//! Diagnostics module tests.

use super::*;
use crate::config::MissingRecordPolicy;
use crate::dns::{DnsRecordType, RecordLabel};
use crate::test_helpers::RecordingResolver;

fn query(record_type: DnsRecordType, name: &str) -> (DnsRecordType, String) {
    (record_type, name.to_string())
}

#[test]
fn test_plan_base_order() {
    let plan = build_query_plan(&LookupRequest::new("example.com"));
    let types: Vec<_> = plan.iter().map(|step| step.record_type).collect();
    assert_eq!(
        types,
        vec![
            DnsRecordType::A,
            DnsRecordType::Mx,
            DnsRecordType::Ns,
            DnsRecordType::Cname,
            DnsRecordType::Txt,
            DnsRecordType::Txt,
        ]
    );
    assert_eq!(plan[5].name, "_dmarc.example.com");
    assert_eq!(plan[5].kind, StepKind::Dmarc);
}

#[test]
fn test_plan_with_ipv6_and_selector() {
    let request = LookupRequest::new("example.com")
        .with_ipv6(true)
        .with_dkim_selector("s1");
    let plan = build_query_plan(&request);
    let names: Vec<_> = plan
        .iter()
        .map(|step| (step.record_type, step.name.as_str()))
        .collect();
    assert_eq!(
        &names[5..],
        &[
            (DnsRecordType::Aaaa, "example.com"),
            (DnsRecordType::Txt, "s1._domainkey.example.com"),
            (DnsRecordType::Txt, "_dmarc.example.com"),
        ]
    );
}

#[test]
fn test_effective_selector() {
    assert_eq!(LookupRequest::new("a.com").effective_dkim_selector(), None);
    assert_eq!(
        LookupRequest::new("a.com")
            .with_dkim_selector("")
            .effective_dkim_selector(),
        None
    );
    assert_eq!(
        LookupRequest::new("a.com")
            .with_dkim_selector("default")
            .effective_dkim_selector(),
        None
    );
    assert_eq!(
        LookupRequest::new("a.com")
            .with_dkim_selector(" google ")
            .effective_dkim_selector(),
        Some("google")
    );
}

#[tokio::test]
async fn test_query_order_without_optional_steps() {
    let resolver = RecordingResolver::new();
    let request = LookupRequest::new("example.com").with_dkim_selector("");
    let outcome = run_diagnostics(&resolver, &request).await;

    assert!(outcome.is_empty());
    assert_eq!(
        resolver.queries(),
        vec![
            query(DnsRecordType::A, "example.com"),
            query(DnsRecordType::Mx, "example.com"),
            query(DnsRecordType::Ns, "example.com"),
            query(DnsRecordType::Cname, "example.com"),
            query(DnsRecordType::Txt, "example.com"),
            query(DnsRecordType::Txt, "_dmarc.example.com"),
        ]
    );
}

#[tokio::test]
async fn test_no_aaaa_without_ipv6() {
    let resolver =
        RecordingResolver::new().with(DnsRecordType::Aaaa, "example.com", &["2001:db8::1"]);
    let outcome = run_diagnostics(&resolver, &LookupRequest::new("example.com")).await;

    assert!(outcome
        .records()
        .all(|record| record.query_type != DnsRecordType::Aaaa));
    assert!(resolver
        .queries()
        .iter()
        .all(|(record_type, _)| *record_type != DnsRecordType::Aaaa));
}

#[tokio::test]
async fn test_aaaa_with_ipv6() {
    let resolver =
        RecordingResolver::new().with(DnsRecordType::Aaaa, "example.com", &["2001:db8::1"]);
    let request = LookupRequest::new("example.com").with_ipv6(true);
    let outcome = run_diagnostics(&resolver, &request).await;

    let records: Vec<_> = outcome.records().collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].label, RecordLabel::Type(DnsRecordType::Aaaa));
    assert_eq!(records[0].value, "2001:db8::1");
}

#[tokio::test]
async fn test_default_selector_skips_dkim() {
    let resolver = RecordingResolver::new();
    let request = LookupRequest::new("example.com").with_dkim_selector("default");
    let outcome = run_diagnostics(&resolver, &request).await;

    assert_eq!(outcome.not_found().count(), 0);
    assert!(!resolver
        .queries()
        .iter()
        .any(|(_, name)| name.contains("_domainkey")));
}

#[tokio::test]
async fn test_missing_dkim_reports_selector() {
    let resolver = RecordingResolver::new();
    let request = LookupRequest::new("example.com").with_dkim_selector("s1");
    let outcome = run_diagnostics(&resolver, &request).await;

    let missing: Vec<_> = outcome.not_found().collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].label, RecordLabel::Dkim);
    assert_eq!(missing[0].domain, "example.com");
    assert_eq!(missing[0].queried_name, "s1._domainkey.example.com");
    assert_eq!(missing[0].reason, "No DKIM record found for selector \"s1\"");
}

#[tokio::test]
async fn test_dkim_answers_always_labelled_dkim() {
    let resolver = RecordingResolver::new().with(
        DnsRecordType::Txt,
        "s1._domainkey.example.com",
        &["k=rsa; p=MIGfMA0", "v=spf1 -all"],
    );
    let request = LookupRequest::new("example.com").with_dkim_selector("s1");
    let outcome = run_diagnostics(&resolver, &request).await;

    let records: Vec<_> = outcome.records().collect();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.label == RecordLabel::Dkim));
    assert_eq!(records[0].queried_name, "s1._domainkey.example.com");
    assert_eq!(records[0].domain, "example.com");
    assert_eq!(outcome.not_found().count(), 0);
}

#[tokio::test]
async fn test_spf_round_trip_value_unchanged() {
    let spf = "v=spf1 include:_spf.example.com ~all";
    let resolver = RecordingResolver::new().with(DnsRecordType::Txt, "example.com", &[spf]);
    let outcome = run_diagnostics(&resolver, &LookupRequest::new("example.com")).await;

    let record = outcome.records().next().unwrap();
    assert_eq!(record.label, RecordLabel::Spf);
    assert_eq!(record.query_type, DnsRecordType::Txt);
    assert_eq!(record.value, spf);
    assert!(record.resolved_addresses.is_empty());
}

#[tokio::test]
async fn test_generic_txt_query_surfaces_dkim_and_plain_txt() {
    let resolver = RecordingResolver::new().with(
        DnsRecordType::Txt,
        "example.com",
        &["v=DKIM1; p=abc", "google-site-verification=xyz"],
    );
    let outcome = run_diagnostics(&resolver, &LookupRequest::new("example.com")).await;
    let labels: Vec<_> = outcome.records().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec![RecordLabel::Dkim, RecordLabel::Type(DnsRecordType::Txt)]
    );
}

#[tokio::test]
async fn test_mx_and_ns_resolved_to_addresses() {
    let resolver = RecordingResolver::new()
        .with(
            DnsRecordType::Mx,
            "example.com",
            &["10 mail.example.com.", "20 backup.example.com."],
        )
        .with(DnsRecordType::A, "mail.example.com.", &["192.0.2.1"])
        .with(DnsRecordType::Ns, "example.com", &["ns1.example.com."])
        .with(
            DnsRecordType::A,
            "ns1.example.com.",
            &["198.51.100.1", "198.51.100.2"],
        );
    let outcome = run_diagnostics(&resolver, &LookupRequest::new("example.com")).await;

    let records: Vec<_> = outcome.records().collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].value, "10 mail.example.com.");
    assert_eq!(records[0].resolved_addresses, vec!["192.0.2.1"]);
    assert_eq!(records[1].value, "20 backup.example.com.");
    assert!(records[1].resolved_addresses.is_empty());
    assert_eq!(records[2].label, RecordLabel::Type(DnsRecordType::Ns));
    assert_eq!(
        records[2].resolved_addresses_joined(),
        "198.51.100.1, 198.51.100.2"
    );

    // Secondary lookups happen within their step, before the next base type
    assert_eq!(
        resolver.queries(),
        vec![
            query(DnsRecordType::A, "example.com"),
            query(DnsRecordType::Mx, "example.com"),
            query(DnsRecordType::A, "mail.example.com."),
            query(DnsRecordType::A, "backup.example.com."),
            query(DnsRecordType::Ns, "example.com"),
            query(DnsRecordType::A, "ns1.example.com."),
            query(DnsRecordType::Cname, "example.com"),
            query(DnsRecordType::Txt, "example.com"),
            query(DnsRecordType::Txt, "_dmarc.example.com"),
        ]
    );
}

#[tokio::test]
async fn test_a_records_not_resolved_further() {
    let resolver = RecordingResolver::new().with(DnsRecordType::A, "example.com", &["192.0.2.7"]);
    let outcome = run_diagnostics(&resolver, &LookupRequest::new("example.com")).await;

    let record = outcome.records().next().unwrap();
    assert!(!record.carries_addresses());
    assert!(record.resolved_addresses.is_empty());
    assert_eq!(resolver.queries().len(), 6);
}

#[tokio::test]
async fn test_dmarc_label_fallback() {
    let resolver = RecordingResolver::new().with(
        DnsRecordType::Txt,
        "_dmarc.example.com",
        &["v=DMARC1; p=reject", "something else", "v=spf1 -all"],
    );
    let outcome = run_diagnostics(&resolver, &LookupRequest::new("example.com")).await;

    let labels: Vec<_> = outcome.records().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec![RecordLabel::Dmarc, RecordLabel::Dmarc, RecordLabel::Spf]
    );
    assert!(outcome
        .records()
        .all(|r| r.queried_name == "_dmarc.example.com"));
}

#[tokio::test]
async fn test_empty_dmarc_contributes_nothing_by_default() {
    let resolver = RecordingResolver::new().with(DnsRecordType::A, "example.com", &["192.0.2.7"]);
    let outcome = run_diagnostics(&resolver, &LookupRequest::new("example.com")).await;
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome.not_found().count(), 0);
}

#[tokio::test]
async fn test_report_all_missing_records() {
    let resolver = RecordingResolver::new().with(DnsRecordType::A, "example.com", &["192.0.2.7"]);
    let request = LookupRequest::new("example.com").with_dkim_selector("s1");
    let outcome = Diagnostics::new(&resolver)
        .with_missing_records(MissingRecordPolicy::All)
        .run(&request)
        .await;

    let labels: Vec<_> = outcome.iter().map(OutcomeEntry::label).collect();
    assert_eq!(
        labels,
        vec![
            RecordLabel::Type(DnsRecordType::A),
            RecordLabel::Type(DnsRecordType::Mx),
            RecordLabel::Type(DnsRecordType::Ns),
            RecordLabel::Type(DnsRecordType::Cname),
            RecordLabel::Type(DnsRecordType::Txt),
            RecordLabel::Dkim,
            RecordLabel::Dmarc,
        ]
    );
    let reasons: Vec<_> = outcome.not_found().map(|m| m.reason.as_str()).collect();
    assert_eq!(reasons[0], "No MX record found for example.com");
    assert_eq!(reasons[4], "No DKIM record found for selector \"s1\"");
    assert_eq!(reasons[5], "No DMARC record found for example.com");
}

#[tokio::test]
async fn test_outcome_preserves_answer_order_across_steps() {
    let resolver = RecordingResolver::new()
        .with(DnsRecordType::A, "example.com", &["192.0.2.2", "192.0.2.1"])
        .with(DnsRecordType::Cname, "example.com", &["alias.example.net."])
        .with(DnsRecordType::Txt, "_dmarc.example.com", &["v=DMARC1; p=none"]);
    let outcome = run_diagnostics(&resolver, &LookupRequest::new("example.com")).await;

    let values: Vec<_> = outcome.records().map(|r| r.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["192.0.2.2", "192.0.2.1", "alias.example.net.", "v=DMARC1; p=none"]
    );
    assert_eq!(outcome.request.domain, "example.com");
}
