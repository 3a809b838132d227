use gitrank::identity::AliasResolver;
use gitrank::parse::{apply_blame, apply_history, BlameLine, HistoryLine};
use gitrank::util::is_within_subtree;
use gitrank::{parse_stats, Config, Report};
use pretty_assertions::assert_eq;

const HISTORY: &str = include_str!("fixtures/history.txt");
const BLAME: &str = include_str!("fixtures/blame.txt");

fn counters(report: &Report, name: &str) -> (u64, u64, u64) {
    let record = report.contributor(name).unwrap();
    record.buckets.iter().fold((0, 0, 0), |acc, b| {
        (acc.0 + b.additions, acc.1 + b.deletions, acc.2 + b.commits)
    })
}

fn totals(report: &Report) -> (u64, u64, u64) {
    (
        report.total_additions(),
        report.total_deletions(),
        report.total_commits(),
    )
}

#[test]
fn history_header_strips_quotes() {
    assert_eq!(
        HistoryLine::parse("'Jane Doe|Mon Jan 6 10:00:00 2020 +0100'"),
        HistoryLine::Header {
            author: "Jane Doe",
            date: "Mon Jan 6 10:00:00 2020 +0100",
        }
    );
}

#[test]
fn history_change_lines_treat_binary_markers_as_zero() {
    assert_eq!(
        HistoryLine::parse("12\t3\tsrc/lib.rs"),
        HistoryLine::Change {
            additions: 12,
            deletions: 3,
            path: "src/lib.rs",
        }
    );
    assert_eq!(
        HistoryLine::parse("-\t-\tlogo.png"),
        HistoryLine::Change {
            additions: 0,
            deletions: 0,
            path: "logo.png",
        }
    );
}

#[test]
fn history_rejects_unexpected_shapes() {
    assert_eq!(HistoryLine::parse(""), HistoryLine::Blank);
    assert_eq!(HistoryLine::parse("   "), HistoryLine::Blank);
    assert_eq!(HistoryLine::parse("no delimiter here"), HistoryLine::Malformed);
    assert_eq!(HistoryLine::parse("1\t2"), HistoryLine::Malformed);
    assert_eq!(HistoryLine::parse("1\t2\ta\tb"), HistoryLine::Malformed);
    assert_eq!(HistoryLine::parse("'|Mon Jan 6 10:00:00 2020 +0100'"), HistoryLine::Malformed);
}

#[test]
fn blame_line_joins_multi_token_authors() {
    assert_eq!(
        BlameLine::parse("    42 author Jane Q. Doe"),
        BlameLine::Entry {
            count: 42,
            author: "Jane Q. Doe".to_string(),
        }
    );
    assert_eq!(BlameLine::parse("x author Jane"), BlameLine::InvalidCount("x"));
    assert_eq!(BlameLine::parse("42 author"), BlameLine::Malformed);
    assert_eq!(BlameLine::parse(""), BlameLine::Blank);
}

#[test]
fn path_filter_includes_root_and_nested_paths() {
    assert!(is_within_subtree("src/main.rs", "/"));
    assert!(is_within_subtree("src/main.rs", "/src"));
    assert!(is_within_subtree("src/net/tcp.rs", "/src/"));
    assert!(is_within_subtree("src", "/src"));
    assert!(is_within_subtree("src/v1..v2/notes.md", "/src"));
    assert!(!is_within_subtree("README.md", "/src"));
    assert!(!is_within_subtree("srcs/main.rs", "/src"));
    assert!(!is_within_subtree("docs/src/a.md", "src"));
}

#[test]
fn full_history_matches_expected_totals() {
    let report = parse_stats(HISTORY, "", "", "/", &Config::default()).unwrap();

    assert_eq!(totals(&report), (189, 8, 9));
    assert_eq!(counters(&report, "Contributor1"), (159, 3, 6));
    assert_eq!(counters(&report, "Contributor2"), (29, 4, 2));
    assert_eq!(counters(&report, "Contributor3"), (1, 1, 1));

    let order: Vec<&str> = report.contributors().map(|c| c.name.as_str()).collect();
    assert_eq!(order, vec!["Contributor3", "Contributor2", "Contributor1"]);
}

#[test]
fn subtree_narrows_totals_and_drops_outside_contributors() {
    let report = parse_stats(HISTORY, "", "", "/src", &Config::default()).unwrap();

    assert_eq!(totals(&report), (176, 4, 7));
    assert_eq!(counters(&report, "Contributor1"), (150, 2, 5));
    assert_eq!(counters(&report, "Contributor2"), (26, 2, 2));
    assert!(!report.has_contributor("Contributor3"));
}

#[test]
fn subtree_without_matches_yields_empty_report() {
    let report = parse_stats(HISTORY, "", "", "/nowhere", &Config::default()).unwrap();

    assert_eq!(report.contributor_count(), 0);
    assert_eq!(totals(&report), (0, 0, 0));
}

#[test]
fn commit_counted_once_per_header_on_first_qualifying_change() {
    let text = "'a|Mon Jan 6 10:00:00 2020 +0100'\n\
                1\t0\tdocs/x.md\n\
                2\t0\tsrc/x.rs\n\
                3\t0\tsrc/y.rs\n\
                'a|Tue Jan 7 10:00:00 2020 +0100'\n\
                4\t0\tdocs/y.md\n";
    let mut report = Report::default();
    let summary = apply_history(text, &mut report, &AliasResolver::new(), "/src").unwrap();

    assert_eq!(totals(&report), (5, 0, 1));
    assert_eq!(summary.applied, 2);
    assert_eq!(summary.filtered, 2);
}

#[test]
fn malformed_lines_are_skipped_without_aborting() {
    let text = "stray\t1\n\
                5\t5\torphan.rs\n\
                'a|Mon Jan 6 10:00:00 2020 +0100'\n\
                2\t1\tsrc/x.rs\n\
                garbage line\n\
                9\t9\tsrc/lost.rs\n\
                'b|not a date'\n\
                1\t0\tsrc/z.rs\n";
    let mut report = Report::default();
    let summary = apply_history(text, &mut report, &AliasResolver::new(), "/").unwrap();

    assert_eq!(summary.skipped, 4);
    assert_eq!(counters(&report, "a"), (2, 1, 1));
    assert_eq!(counters(&report, "b"), (1, 0, 1));
    assert_eq!(totals(&report), (3, 1, 2));
}

#[test]
fn aliases_merge_and_suppress_authors() {
    let aliases = AliasResolver::new()
        .with_alias("jdoe", "Jane Doe")
        .with_alias("bot", "");
    let text = "'jdoe|Mon Jan 6 10:00:00 2020 +0100'\n\
                3\t0\ta.rs\n\
                'Jane Doe|Tue Jan 7 10:00:00 2020 +0100'\n\
                4\t1\tb.rs\n\
                'bot|Wed Jan 8 10:00:00 2020 +0100'\n\
                100\t100\tlock.json\n";
    let mut report = Report::default();
    let summary = apply_history(text, &mut report, &aliases, "/").unwrap();

    assert_eq!(report.contributor_count(), 1);
    assert_eq!(counters(&report, "Jane Doe"), (7, 1, 2));
    assert_eq!(summary.suppressed, 1);
    assert_eq!(totals(&report), (7, 1, 2));
}

#[test]
fn blame_adds_lines_without_commits() {
    let aliases = AliasResolver::new().with_alias("Some Blame Only", "");
    let mut report = Report::default();
    let summary = apply_blame(BLAME, &mut report, &aliases, "blame").unwrap();

    assert_eq!(summary.applied, 2);
    assert_eq!(summary.suppressed, 1);
    assert_eq!(counters(&report, "Contributor1"), (120, 0, 0));
    assert_eq!(totals(&report), (150, 0, 0));
}

#[test]
fn blame_skips_bad_counts_and_short_lines() {
    let text = "  12 author Jane\n  many author Jane\n  3 author\n\n  1 author Jane\n";
    let mut report = Report::default();
    let summary = apply_blame(text, &mut report, &AliasResolver::new(), "blame").unwrap();

    assert_eq!(summary.skipped, 2);
    assert_eq!(counters(&report, "Jane"), (13, 0, 0));
}

#[test]
fn blame_contributions_land_in_otherwise_bucket() {
    let config = Config::from_json(
        r#"{"periods": [{"user": "Contributor1", "start": "2019-01-01", "end": "2030-01-01", "alias": "always"}]}"#,
    )
    .unwrap();
    let report = parse_stats(HISTORY, BLAME, BLAME, "/", &config).unwrap();

    let c1 = report.contributor("Contributor1").unwrap();
    assert_eq!(c1.buckets[0].name, "Contributor1 (otherwise)");
    assert_eq!(c1.buckets[0].additions, 240);
    assert_eq!(c1.buckets[0].commits, 0);
    assert_eq!(c1.buckets[1].additions, 159);
    assert_eq!(c1.buckets[1].commits, 6);
    assert_eq!(report.total_additions(), 189 + 2 * 154);
}
