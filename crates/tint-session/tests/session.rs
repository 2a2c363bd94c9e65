//! Session tests for tint-session
//!
//! Input handling, copy-then-record ordering and history recall.

use std::time::{Duration, Instant};

use tint_color::{CssColorResolver, FnResolver};
use tint_history::{AppendOutcome, HistoryStore, MemoryBackend};
use tint_session::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn config(capacity: usize) -> Config {
    Config::builder()
        .history_capacity(capacity)
        .copy_debounce(Duration::ZERO)
        .build()
        .unwrap()
}

fn session(capacity: usize) -> Session<CssColorResolver, MemoryBackend> {
    init_tracing();
    let store = HistoryStore::open(MemoryBackend::new(), capacity);
    Session::new(config(capacity), CssColorResolver::new(), store)
}

// ============================================================================
// INPUT
// ============================================================================

#[test]
fn test_named_color_outputs() {
    let mut s = session(20);
    s.set_input("red");

    let out = s.output().unwrap();
    assert_eq!(out.rgb, "rgb(255, 0, 0)");
    assert_eq!(out.hex, "#FF0000FF");
    assert_eq!(out.packed_literal, "Color(0xFFFF0000)");
}

#[test]
fn test_empty_input_clears_outputs() {
    let mut s = session(20);
    s.set_input("#00ff00");
    assert!(s.output().is_some());

    s.set_input("");
    assert!(s.output().is_none());
    for kind in FormatKind::ALL {
        assert_eq!(s.decorated(kind), None);
    }
}

#[test]
fn test_invalid_input_clears_outputs() {
    let mut s = session(20);
    s.set_input("blue");
    s.set_input("blu");
    assert!(s.output().is_none());
    assert_eq!(s.input(), "blu");
}

#[test]
fn test_input_is_normalized() {
    let mut s = session(20);
    s.set_input("rgb（0，128，0）");
    assert_eq!(s.input(), "rgb(0,128,0)");
    assert_eq!(s.output().unwrap().hex, "#008000FF");
}

#[test]
fn test_translucent_input_is_not_converted() {
    let mut s = session(20);
    for input in ["transparent", "rgba(255, 0, 0, 0.5)", "#ff000080"] {
        s.set_input(input);
        assert!(s.output().is_none(), "{input} should have no conversion");
        assert!(matches!(s.record(input), Ok(AppendOutcome::Rejected)));
    }
    assert!(s.store().list().is_empty());
}

#[test]
fn test_clear() {
    let mut s = session(20);
    s.set_input("red");
    s.clear();
    assert_eq!(s.input(), "");
    assert!(s.output().is_none());
}

#[test]
fn test_prefix_and_suffix() {
    let mut s = session(20);
    s.set_input("#0000ff");
    s.set_prefix("const BLUE = ");
    s.set_suffix(";");

    assert_eq!(
        s.decorated(FormatKind::PackedLiteral).as_deref(),
        Some("const BLUE = Color(0xFF0000FF);")
    );
    // Outputs themselves stay undecorated
    assert_eq!(s.output().unwrap().packed_literal, "Color(0xFF0000FF)");
}

// ============================================================================
// COPY
// ============================================================================

#[test]
fn test_copy_records_input_not_output() -> anyhow::Result<()> {
    let mut s = session(20);
    let clipboard = MemoryClipboard::new();
    s.set_input("red");
    s.set_prefix("'");
    s.set_suffix("'");

    let copied = smol::block_on(s.copy(FormatKind::Hex, &clipboard))?;
    assert_eq!(copied, "'#FF0000FF'");
    assert_eq!(clipboard.contents().as_deref(), Some("'#FF0000FF'"));
    assert_eq!(s.store().list().entries(), ["red"]);
    assert_eq!(s.store().backend().writes(), 1);
    Ok(())
}

#[test]
fn test_repeated_copy_records_once() -> anyhow::Result<()> {
    let mut s = session(20);
    let clipboard = MemoryClipboard::new();
    s.set_input("#00ff00");

    smol::block_on(async {
        for kind in FormatKind::ALL {
            s.copy(kind, &clipboard).await?;
        }
        Ok::<_, SessionError>(())
    })?;

    assert_eq!(clipboard.writes().len(), 3);
    assert_eq!(s.store().list().entries(), ["#00ff00"]);
    assert_eq!(s.store().backend().writes(), 1);
    Ok(())
}

#[test]
fn test_copy_without_output() {
    let mut s = session(20);
    let clipboard = MemoryClipboard::new();
    s.set_input("nope");

    let result = smol::block_on(s.copy(FormatKind::Rgb, &clipboard));
    assert!(matches!(result, Err(SessionError::NothingToCopy)));
    assert!(clipboard.writes().is_empty());
    assert!(s.store().list().is_empty());
}

#[test]
fn test_failed_copy_skips_history() {
    let mut s = session(20);
    s.set_input("red");

    let result = smol::block_on(s.copy(FormatKind::Rgb, &MemoryClipboard::unavailable()));
    assert!(matches!(result, Err(SessionError::Clipboard(ClipboardError::Unavailable))));
    assert!(s.store().list().is_empty());
}

#[test]
fn test_history_write_waits_for_debounce() -> anyhow::Result<()> {
    init_tracing();
    let delay = Duration::from_millis(50);
    let config = Config::builder().copy_debounce(delay).build()?;
    let store = HistoryStore::open(MemoryBackend::new(), config.history_capacity);
    let mut s = Session::new(config, CssColorResolver::new(), store);
    s.set_input("navy");

    let started = Instant::now();
    smol::block_on(s.copy(FormatKind::Hex, &MemoryClipboard::new()))?;
    assert!(started.elapsed() >= delay);
    assert_eq!(s.store().list().entries(), ["navy"]);
    Ok(())
}

#[test]
fn test_capacity_from_config() -> anyhow::Result<()> {
    let mut s = session(2);
    let clipboard = MemoryClipboard::new();

    for name in ["red", "green", "blue"] {
        s.set_input(name);
        smol::block_on(s.copy(FormatKind::Rgb, &clipboard))?;
    }

    assert_eq!(s.store().list().entries(), ["green", "blue"]);
    Ok(())
}

#[test]
fn test_history_uses_session_resolver() {
    init_tracing();
    let resolver = FnResolver(|t: &str| (t == "brand").then(|| "#336699".to_string()));
    let store = HistoryStore::open(MemoryBackend::new(), 20);
    let mut s = Session::new(config(20), resolver, store);

    s.set_input("brand");
    assert_eq!(s.output().unwrap().hex, "#336699FF");
    assert!(matches!(s.record("brand"), Ok(AppendOutcome::Added { .. })));
    assert!(matches!(s.record("red"), Ok(AppendOutcome::Rejected)));
}

// ============================================================================
// HISTORY
// ============================================================================

#[test]
fn test_history_display_and_recall() {
    let mut s = session(20);
    for name in ["red", "#00ff00", "blue"] {
        s.record(name).unwrap();
    }

    let shown: Vec<_> = s.history().iter().map(|e| e.value.to_string()).collect();
    assert_eq!(shown, ["blue", "#00ff00", "red"]);
    assert_eq!(s.history()[0].weight, 1.0);

    assert!(s.recall(1));
    assert_eq!(s.input(), "#00ff00");
    assert_eq!(s.output().unwrap().rgb, "rgb(0, 255, 0)");

    assert!(!s.recall(3));
    assert_eq!(s.input(), "#00ff00");
}

#[test]
fn test_open_file_session() -> anyhow::Result<()> {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let config = Config::builder()
        .history_capacity(7)
        .copy_debounce(Duration::ZERO)
        .storage_path(dir.path().join("history.json"))
        .build()?;

    {
        let mut s = Session::open(config.clone());
        s.set_input("red");
        smol::block_on(s.copy(FormatKind::Hex, &MemoryClipboard::new()))?;
    }

    let s = Session::open(config);
    assert_eq!(s.store().list().entries(), ["red"]);
    assert_eq!(s.store().capacity(), 7);
    Ok(())
}
