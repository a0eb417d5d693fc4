use std::fs;

use rill::interpret;
use walkdir::WalkDir;

/// Runs every script under `tests/scripts` and checks its final value
/// against the script's `// expect:` header.
#[test]
fn script_corpus_matches_expectations() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "rill")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let expected = source.lines()
                             .find_map(|line| line.trim().strip_prefix("// expect: "))
                             .unwrap_or_else(|| panic!("{path:?} has no '// expect:' header"));

        let value = interpret(&source).unwrap_or_else(|e| {
                                          panic!("Script {path:?} failed:\n{source}\nError: {e}")
                                      });
        assert_eq!(value.to_string(), expected, "wrong result for {path:?}");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
