use std::fs;

use sugu::run_program;
use walkdir::WalkDir;

// Every script in tests/scripts checks itself and throws on failure, so a
// clean run is the assertion.
#[test]
fn script_corpus_runs_clean() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "sugu")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_program(&source) {
            panic!("script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "no scripts found under tests/scripts");
}
