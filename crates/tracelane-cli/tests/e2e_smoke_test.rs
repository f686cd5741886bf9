use std::{fs, path::PathBuf};

use tempfile::tempdir;

use tracelane::layout::TimelineMode;
use tracelane_cli::{Args, OutputFormat, run};

/// Demo trace store at the workspace root, relative to workspace not the crate
fn demo_store() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
        .join("traces")
}

/// Collects the session ids of all .json documents in a directory
fn collect_trace_ids(dir: &PathBuf) -> Vec<String> {
    let mut ids: Vec<String> = if let Ok(entries) = fs::read_dir(dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .filter_map(|path| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().to_string())
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    ids.sort();
    ids
}

fn args(trace_id: &str, store: &PathBuf, output: PathBuf, format: OutputFormat) -> Args {
    Args {
        trace_id: trace_id.to_string(),
        store: store.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        format,
        mode: None,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demo_traces() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let store = demo_store();
    let trace_ids = collect_trace_ids(&store);

    assert!(
        !trace_ids.is_empty(),
        "No demo traces found in demos/traces/"
    );

    let mut failed = Vec::new();

    for trace_id in &trace_ids {
        for format in [OutputFormat::Svg, OutputFormat::Json] {
            let output_path = temp_dir
                .path()
                .join(format!("{trace_id}.{}", format.extension()));

            if let Err(e) = run(&args(trace_id, &store, output_path.clone(), format)) {
                failed.push((trace_id.clone(), e.to_string()));
                continue;
            }

            let content = fs::read_to_string(&output_path).expect("Output should be written");
            let marker = match format {
                OutputFormat::Svg => "<svg",
                OutputFormat::Json => "\"sessionId\"",
            };
            if !content.contains(marker) {
                failed.push((trace_id.clone(), format!("missing `{marker}` in output")));
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemo traces that failed:");
        for (id, err) in &failed {
            eprintln!("  - {id}: {err}");
        }
        panic!("{} demo trace export(s) failed unexpectedly", failed.len());
    }

    println!("✅ All {} demo traces passed", trace_ids.len());
}

#[test]
fn e2e_smoke_test_mode_override() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let store = demo_store();
    let output_path = temp_dir.path().join("rows.json");

    let mut args = args(
        "bursty-with-retry",
        &store,
        output_path.clone(),
        OutputFormat::Json,
    );
    args.mode = Some(TimelineMode::RowIndexed);
    run(&args).expect("Row-indexed export should succeed");

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("\"mode\": \"row-indexed\""));
}

#[test]
fn e2e_smoke_test_lookup_by_message_id() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let store = demo_store();
    let output_path = temp_dir.path().join("by-message.json");

    run(&args("adt-2", &store, output_path.clone(), OutputFormat::Json))
        .expect("Message id lookup should succeed");

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("\"sessionId\": \"adt-admission\""));
}

#[test]
fn e2e_smoke_test_error_cases() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let broken_store = temp_dir.path().join("broken");
    fs::create_dir(&broken_store).unwrap();
    fs::write(broken_store.join("truncated.json"), "{ \"sessionId\": ").unwrap();
    fs::write(
        broken_store.join("no-created-at.json"),
        r#"{ "sessionId": "no-created-at", "hops": [{ "id": "h1" }] }"#,
    )
    .unwrap();

    let cases = [
        ("does-not-exist", demo_store()),
        ("truncated", broken_store.clone()),
        ("no-created-at", broken_store.clone()),
        ("anything", temp_dir.path().join("missing-store")),
    ];

    let mut unexpectedly_succeeded = Vec::new();

    for (trace_id, store) in &cases {
        let output_path = temp_dir.path().join(format!("error_{trace_id}.svg"));
        if run(&args(trace_id, store, output_path.clone(), OutputFormat::Svg)).is_ok() {
            unexpectedly_succeeded.push(trace_id.to_string());
        }
        assert!(!output_path.exists(), "{trace_id}: no output on failure");
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError cases that unexpectedly succeeded:");
        for id in &unexpectedly_succeeded {
            eprintln!("  - {id}");
        }
        panic!(
            "{} error case(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}
