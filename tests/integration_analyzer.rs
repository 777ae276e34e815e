use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path};
use usingmap::core::{normalize_path, CodebaseAnalyzer, ImportEdge, ScanConfig, ScanError};

fn write<P: AsRef<Path>>(p: P, content: &[u8]) {
    let p = p.as_ref();
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, content).unwrap();
}

fn analyzer(root: &Path) -> CodebaseAnalyzer {
    CodebaseAnalyzer::new(ScanConfig::new(root).with_project_prefix("ThroneGame"))
}

#[test]
fn single_file_with_mixed_imports() {
    let dir = tempfile::TempDir::new().unwrap();
    let alpha = dir.path().join("src/Alpha.cs");
    write(&alpha, b"using ThroneGame.Core;\nusing System.Text;\n\nclass Alpha {}\n");

    let analysis = analyzer(dir.path()).analyze().unwrap();

    assert_eq!(
        analysis.index.get(&alpha).unwrap(),
        &["ThroneGame.Core".to_string(), "System.Text".to_string()]
    );
    assert!(analysis.classification.first_party.contains("ThroneGame.Core"));
    assert!(analysis.classification.third_party.contains("System.Text"));
    assert_eq!(analysis.edges, vec![ImportEdge::new("Alpha", "Core")]);
}

#[test]
fn excluded_directory_contributes_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path().join("src/Alpha.cs"), b"using ThroneGame.Core;\n");
    let generated = dir.path().join("obj/Generated.cs");
    write(&generated, b"using ThroneGame.Generated;\nusing System.CodeDom;\n");

    let analysis = analyzer(dir.path()).analyze().unwrap();

    assert!(!analysis.index.contains(&generated));
    assert!(analysis.index.paths().all(|p| !p.starts_with(dir.path().join("obj"))));
    assert!(!analysis.classification.first_party.contains("ThroneGame.Generated"));
    assert!(!analysis.classification.third_party.contains("System.CodeDom"));
    assert!(analysis.edges.iter().all(|e| e.source != "Generated"));
}

#[test]
fn dotted_file_name_collapses_to_first_segment() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path().join("src/My.Widget.cs"), b"using ThroneGame.Ui.Widgets;\n");

    let analysis = analyzer(dir.path()).analyze().unwrap();
    assert_eq!(analysis.edges, vec![ImportEdge::new("My", "Widgets")]);
}

#[test]
fn undecodable_file_is_skipped_and_run_completes() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path().join("src/Alpha.cs"), b"using ThroneGame.Core;\n");
    let broken = dir.path().join("src/Broken.cs");
    write(&broken, &[0xC3, 0x28, 0xA0, 0xA1]);

    let analysis = analyzer(dir.path()).analyze().unwrap();

    assert!(!analysis.index.contains(&broken));
    assert_eq!(analysis.index.len(), 1);
    assert_eq!(analysis.skipped_files.len(), 1);
    assert!(matches!(analysis.skipped_files[0], ScanError::Decode { .. }));
    assert_eq!(analysis.edges, vec![ImportEdge::new("Alpha", "Core")]);
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_skipped_and_run_completes() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path().join("src/Alpha.cs"), b"using ThroneGame.Core;\n");
    let locked = dir.path().join("src/Locked.cs");
    write(&locked, b"using ThroneGame.Secret;\n");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read it anyway; nothing to check in that case.
    if fs::read(&locked).is_ok() {
        return;
    }

    let analysis = analyzer(dir.path()).analyze().unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    assert!(!analysis.index.contains(&locked));
    assert!(matches!(analysis.skipped_files[0], ScanError::FileRead { .. }));
    assert_eq!(analysis.edges, vec![ImportEdge::new("Alpha", "Core")]);
}

#[test]
fn file_without_imports_has_empty_entry() {
    let dir = tempfile::TempDir::new().unwrap();
    let plain = dir.path().join("Plain.cs");
    write(&plain, b"namespace ThroneGame { class Plain {} }\n");

    let analysis = analyzer(dir.path()).analyze().unwrap();
    assert_eq!(analysis.index.get(&plain), Some(&[] as &[String]));
    assert!(analysis.edges.is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path().join("Game1.cs"), b"using Microsoft.Xna.Framework;\nusing ThroneGame.Scenes;\n");
    write(dir.path().join("Scenes/SceneManager.cs"), b"using ThroneGame.UI;\nusing ThroneGame.Maps;\n");
    write(dir.path().join("Maps/Map.cs"), b"using ThroneGame.Entities;\nusing ThroneGame.Tiles;\n");
    write(dir.path().join("Content/Pipeline.cs"), b"using ThroneGame.Ignored;\n");

    let first = analyzer(dir.path()).analyze().unwrap();
    let second = analyzer(dir.path()).analyze().unwrap();

    assert_eq!(first.index, second.index);
    assert_eq!(first.edges, second.edges);
    assert_eq!(first.classification, second.classification);
    assert_eq!(first.index.len(), 3);

    let targets: BTreeSet<&str> = first.edges.iter().map(|e| e.target.as_str()).collect();
    let expected: BTreeSet<&str> = ["Scenes", "UI", "Maps", "Entities", "Tiles"].into_iter().collect();
    assert_eq!(targets, expected);
}

#[test]
fn missing_root_is_fatal_configuration_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = analyzer(&dir.path().join("absent")).analyze().unwrap_err();
    assert!(matches!(err, ScanError::Configuration(_)));
    assert!(err.is_fatal());
}

fn has_dot_segments(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::CurDir | Component::ParentDir))
}

#[test]
fn relative_root_reports_absolute_paths() {
    let analysis = CodebaseAnalyzer::new(ScanConfig::new("./src/../tests"))
        .analyze()
        .unwrap();
    assert!(analysis.root.is_absolute());
    assert!(!has_dot_segments(&analysis.root));
    assert_eq!(analysis.root, std::env::current_dir().unwrap().join("tests"));
    assert!(analysis.index.is_empty());
}

#[test]
fn root_with_dot_segments_yields_clean_keys() {
    let dir = tempfile::TempDir::new().unwrap();
    let alpha = dir.path().join("Alpha.cs");
    write(&alpha, b"using ThroneGame.Core;\n");
    write(dir.path().join("a/b/Beta.cs"), b"using System;\n");

    for root in [dir.path().join("a/b/../.."), dir.path().join(".")] {
        let analysis = analyzer(&root).analyze().unwrap();

        assert_eq!(analysis.root, dir.path());
        assert_eq!(analysis.index.len(), 2);
        assert!(analysis.index.paths().all(|p| !has_dot_segments(p)));
        assert!(analysis.index.contains(&alpha));
        assert!(analysis.index.contains(&dir.path().join("a/b/Beta.cs")));
    }
}

#[test]
fn normalize_path_folds_dot_segments() {
    assert_eq!(normalize_path(Path::new("/x/a/b/../../Alpha.cs")), Path::new("/x/Alpha.cs"));
    assert_eq!(normalize_path(Path::new("/x/./y/.")), Path::new("/x/y"));
    assert_eq!(normalize_path(Path::new("/..")), Path::new("/"));
    assert_eq!(normalize_path(Path::new("../a")), Path::new("../a"));
    assert_eq!(normalize_path(Path::new("../../a/..")), Path::new("../.."));
}

struct FixedParser;

impl usingmap::parsers::ImportParser for FixedParser {
    fn parse_file(&self, _file_path: &Path) -> usingmap::core::error::Result<Vec<String>> {
        Ok(vec!["ThroneGame.Fixed".to_string()])
    }

    fn language_name(&self) -> &str {
        "fixed"
    }
}

#[test]
fn custom_parser_and_extension_are_honoured() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path().join("Script.csx"), b"anything");
    write(dir.path().join("Ignored.cs"), b"using ThroneGame.Core;\n");

    let analysis = CodebaseAnalyzer::new(ScanConfig::new(dir.path()).with_extension("csx"))
        .with_parser(Box::new(FixedParser))
        .analyze()
        .unwrap();

    assert_eq!(analysis.index.len(), 1);
    assert_eq!(analysis.edges, vec![ImportEdge::new("Script", "Fixed")]);
}
