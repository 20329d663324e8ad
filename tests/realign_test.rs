//! Integration tests for report realignment.

use benchdiff::{
    realign, realign_file, realign_text, Document, RealignOptions, RealignOutcome, Realigner,
};
use std::fs;

const REPORT: &str = "\
goos: linux
goarch: amd64
pkg: github.com/casbin/casbin/v2
cpu: Intel(R) Xeon(R) Platinum 8272CL CPU @ 2.60GHz
```
                    │   old.txt    │              new.txt               │
                    │    sec/op    │   sec/op     vs base               │
CachedRaw-4            25.64n ± 1%   28.21n ± 2%  +10.02% (p=0.002 n=6)
Enforce-4              150.0n ± 2%   120.0n ± 3%  -20.00% (p=0.002 n=6)
Steady-4               100.0n ± 0%   110.0n ± 0%  +10.00% (p=0.002 n=6)
Boundary-4             100.0n ± 0%   110.01n ± 0%  +10.01% (p=0.002 n=6)
geomean                 1.234µ        1.300µ       +5.35%
¹ need >= 6 samples for confidence interval at level 0.95
```

```
                    │  old.txt   │             new.txt             │
                    │    B/op    │    B/op     vs base             │
Zero-4                  0.000 ± 0%    0.000 ± 0%        ~ (p=1.000 n=6)
geomean                  0.00ns        5.00ns
```
";

/// Character column where `needle` starts in `line`.
fn char_column(line: &str, needle: &str) -> usize {
    let byte = line
        .find(needle)
        .unwrap_or_else(|| panic!("'{}' not found in '{}'", needle, line));
    line[..byte].chars().count()
}

fn line_starting_with<'a>(text: &'a str, prefix: &str) -> &'a str {
    text.lines()
        .find(|line| line.starts_with(prefix))
        .unwrap_or_else(|| panic!("no line starting with '{}'", prefix))
}

#[test]
fn test_rows_share_one_diff_column() {
    let result = realign(&Document::from_text(REPORT), &RealignOptions::default());
    let text = result.to_text();
    let column = result.stats.alignment.diff_column_start;

    // Widest left content is the zero row, 69 chars, plus 4 spaces of padding
    assert_eq!(column, 73);

    for (prefix, annotation) in [
        ("CachedRaw ", "+10.02% 🐌"),
        ("Enforce ", "-20.00% 🚀"),
        ("Steady ", "+10.00% ➡️"),
        ("Boundary ", "+10.01% 🐌"),
        ("Zero ", "+0.00% ➡️"),
    ] {
        let line = line_starting_with(&text, prefix);
        assert!(line.ends_with(annotation), "{}", line);
        assert_eq!(char_column(line, annotation), column, "{}", line);
    }

    let geomeans: Vec<&str> = text.lines().filter(|l| l.starts_with("geomean")).collect();
    assert_eq!(geomeans.len(), 2);
    assert!(geomeans[0].ends_with("+5.35% ➡️"));
    assert_eq!(char_column(geomeans[0], "+5.35%"), column);
    assert_eq!(geomeans[1], format!("{:<73}n/a (has zero)", "geomean"));
}

#[test]
fn test_recomputed_rows_drop_benchstat_tail() {
    let text = realign_text(REPORT, &RealignOptions::default());
    let enforce = line_starting_with(&text, "Enforce");

    assert!(enforce.starts_with("Enforce              150.0n ± 2%   120.0n ± 3%"));
    assert!(!enforce.contains("p=0.002"));
    assert!(!text.contains("Enforce-4"));
}

#[test]
fn test_headers_follow_diff_column() {
    let result = realign(&Document::from_text(REPORT), &RealignOptions::default());
    let text = result.to_text();
    let alignment = result.stats.alignment;

    let headers: Vec<&str> = text.lines().filter(|l| l.contains('│')).collect();
    assert_eq!(headers.len(), 4);
    assert_eq!(result.stats.headers, 4);

    for header in &headers {
        assert_eq!(header.chars().count(), alignment.right_boundary + 1, "{}", header);
        assert!(header.ends_with('│'));
    }

    let labeled: Vec<&&str> = headers.iter().filter(|h| h.contains("vs base")).collect();
    assert_eq!(labeled.len(), 2);
    for header in labeled {
        assert_eq!(char_column(header, "Diff"), alignment.diff_column_start);
    }
    assert!(headers
        .iter()
        .filter(|h| h.contains("old.txt"))
        .all(|h| !h.contains("Diff")));
}

#[test]
fn test_untouched_lines() {
    let text = realign_text(REPORT, &RealignOptions::default());
    let lines: Vec<&str> = text.lines().collect();
    let original: Vec<&str> = REPORT.lines().collect();

    assert_eq!(lines.len(), original.len());
    // Preamble outside fences
    assert_eq!(&lines[..5], &original[..5]);
    // Footnote and blank line between blocks
    assert!(lines.contains(&"¹ need >= 6 samples for confidence interval at level 0.95"));
    assert_eq!(lines[14], "");
    assert!(text.ends_with("```\n"));
}

#[test]
fn test_realigned_report_is_fixed_point() {
    let options = RealignOptions::default();
    let once = realign_text(REPORT, &options);
    let twice = realign_text(&once, &options);
    let thrice = realign_text(&twice, &options);

    assert_eq!(once, twice);
    assert_eq!(twice, thrice);
}

#[test]
fn test_stats() {
    let result = Realigner::default().realign(&Document::from_text(REPORT));
    let stats = result.stats;

    assert_eq!(stats.fenced_blocks, 2);
    assert_eq!(stats.recomputed, 5);
    assert_eq!(stats.zero_pairs, 1);
    assert_eq!(stats.geomean_undefined, 1);
    assert_eq!(stats.carried, 0);
    assert_eq!(stats.data_rows(), 7);
}

#[test]
fn test_enforce_and_zero_geomean_rows() {
    let text = realign_text(
        "```\nEnforce-8   150ns ± 2%   120ns ± 3%\ngeomean   0.00ns   5.00ns\n```\n",
        &RealignOptions::default(),
    );
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[1].starts_with("Enforce "));
    assert!(lines[1].ends_with("-20.00% 🚀"));
    assert!(lines[2].starts_with("geomean "));
    assert!(lines[2].ends_with("n/a (has zero)"));
}

#[test]
fn test_custom_threshold() {
    let options = RealignOptions::default().with_threshold(25.0);
    let text = realign_text(REPORT, &options);

    assert!(line_starting_with(&text, "Enforce").ends_with("-20.00% ➡️"));
    assert!(line_starting_with(&text, "CachedRaw").ends_with("+10.02% ➡️"));
}

#[test]
fn test_carried_percentage_gets_fresh_icon() {
    let report = "```\nSingle-8   12.0n   +15.00% 🚀 ³\n```\n";
    let text = realign_text(report, &RealignOptions::default());
    let row = text.lines().nth(1).unwrap();

    assert!(row.starts_with("Single   12.0n"));
    assert!(row.ends_with("+15.00% 🐌 ³"));
    assert_eq!(realign_text(&text, &RealignOptions::default()), text);
}

#[test]
fn test_realign_file_skips_missing_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comparison.md");

    let outcome = realign_file(&path, &RealignOptions::default()).unwrap();

    assert_eq!(outcome, RealignOutcome::Skipped);
    assert!(!path.exists());
}

#[test]
fn test_realign_file_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comparison.md");
    fs::write(&path, REPORT).unwrap();

    let outcome = realign_file(&path, &RealignOptions::default()).unwrap();

    assert!(matches!(outcome, RealignOutcome::Rewritten(_)));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        realign_text(REPORT, &RealignOptions::default())
    );
}
