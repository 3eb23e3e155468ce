// Mon Aug 24 2026

use std::process::Command;

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_symlib-test"))
        .args(args)
        .output()
        .expect("failed to spawn symlib-test");

    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

#[test]
fn test_unknown_module_reports_error() {
    let (ok, stdout) = run(&["no_such_module_zzz.dll", "Anything"]);
    assert!(!ok);
    assert!(stdout.contains("ERROR:"));
}

#[cfg(target_os = "linux")]
mod linux {
    use super::run;
    use symlib::{Resolver, SymbolInfo};

    const EXE: &str = env!("CARGO_BIN_EXE_symlib-test");

    // A symbol the harness can round-trip: it answers the exact-offset
    // query with its own name, and nothing else sits within `delta` after
    // it.
    fn anchor_symbol(delta: u64) -> Option<SymbolInfo> {
        let resolver = Resolver::with_defaults();
        let table = resolver.load(EXE).ok()?;

        let anchor = table
            .iter()
            .find(|s| {
                s.offset > 0
                    && table.name_at(s.offset) == Some(s.name.as_str())
                    && table.nearest(s.offset + delta) == Some((s.name.as_str(), delta))
            })
            .cloned();
        anchor
    }

    #[test]
    fn test_self_test_passes_on_own_binary() {
        let anchor = match anchor_symbol(0x10) {
            Some(anchor) => anchor,
            None => return,
        };

        let (ok, stdout) = run(&[EXE, &anchor.name]);
        assert!(ok, "self-test failed:\n{}", stdout);
        assert!(stdout.contains("Test passed"));
    }

    #[test]
    fn test_unknown_symbol_not_found() {
        let (ok, stdout) = run(&[EXE, "definitely_no_such_symbol_zzz"]);
        assert!(!ok);
        assert!(stdout.contains("is not found"));
    }

    #[test]
    fn test_delta_overflow_reports_error() {
        let anchor = match anchor_symbol(0x10) {
            Some(anchor) => anchor,
            None => return,
        };

        let delta = u64::MAX.to_string();
        let (ok, stdout) = run(&[EXE, &anchor.name, "--delta", &delta]);
        assert!(!ok);
        assert!(stdout.contains("overflows"), "unexpected output:\n{}", stdout);
    }
}
