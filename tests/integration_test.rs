// tests/integration_test.rs
use std::env;
use std::process::Command;

use serial_test::serial;

use tagver::domain::{BumpRequest, TagPrefix};
use tagver::git::{Git2Repository, Repository};
use tagver::resolver::LatestResolver;

#[test]
fn test_tagver_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "tagver", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("tagver"));
    assert!(stdout.contains("Increment semver-style git tags"));
}

mod git_operations_tests {
    use super::*;
    use git2::Repository as RawRepository;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Scratch repository with one commit history and a mixed set of tags
    fn setup_test_repo() -> TempDir {
        let temp_dir = TempDir::new().expect("Could not create temp dir");

        let repo = RawRepository::init(temp_dir.path()).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        let content_path = temp_dir.path().join("README.md");
        fs::write(&content_path, b"Initial content\n").expect("Could not write initial file");

        let mut index = repo.index().expect("Could not get index");
        index
            .add_path(Path::new("README.md"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = repo.find_tree(tree_id).expect("Could not find tree");

        let commit_id = repo
            .commit(
                Some("HEAD"),
                &repo.signature().expect("Could not get sig"),
                &repo.signature().expect("Could not get sig"),
                "Initial commit",
                &tree,
                &[],
            )
            .expect("Could not create commit");

        let target = repo.find_object(commit_id, None).unwrap();
        for tag in ["v1.0.0", "v1.2.0", "v1.1.9", "v2.0.0-rc1", "notaversion"] {
            repo.tag_lightweight(tag, &target, false)
                .expect("Could not create tag");
        }

        temp_dir
    }

    #[test]
    fn test_list_tags_from_scratch_repo() {
        let temp_dir = setup_test_repo();
        let repo = Git2Repository::open(temp_dir.path()).expect("Should open scratch repo");

        let tags = repo.list_tags().expect("Should list tags");
        assert_eq!(tags.len(), 5);
        assert!(tags.contains(&"v2.0.0-rc1".to_string()));
        assert!(tags.contains(&"notaversion".to_string()));
    }

    #[test]
    fn test_latest_resolution_end_to_end() {
        let temp_dir = setup_test_repo();
        let repo = Git2Repository::open(temp_dir.path()).expect("Should open scratch repo");

        let prefix = TagPrefix::new("v");
        let resolver = LatestResolver::new(prefix.clone(), false);
        let outcome = resolver
            .resolve(&repo.list_tags().unwrap())
            .expect("Lenient resolution should succeed");

        // notaversion is skipped, 2.0.0-rc1 has the greatest triple
        assert!(outcome.from_existing_tag);
        assert_eq!(outcome.latest.precedence(), (2, 0, 0));
        assert_eq!(outcome.latest.build.as_deref(), Some("rc1"));
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn test_create_annotated_tag_and_duplicate_guard() {
        let temp_dir = setup_test_repo();
        let repo = Git2Repository::open(temp_dir.path()).expect("Should open scratch repo");

        let prefix = TagPrefix::new("v");
        let outcome = LatestResolver::new(prefix.clone(), false)
            .resolve(&repo.list_tags().unwrap())
            .unwrap();

        let next = BumpRequest::new(false, false, true).apply(&outcome.latest);
        let tag_name = prefix.format(&next);
        assert_eq!(tag_name, "v2.0.1");
        assert!(repo.find_tag_oid(&tag_name).unwrap().is_none());

        let tagger = repo.tagger().expect("Should resolve tagger identity");
        let head = repo.head_oid().expect("Should resolve HEAD");
        repo.create_annotated_tag(&tag_name, head, &tagger, &tag_name)
            .expect("Should create annotated tag");

        assert!(repo.find_tag_oid(&tag_name).unwrap().is_some());

        // Creating the same tag again must fail
        let result = repo.create_annotated_tag(&tag_name, head, &tagger, &tag_name);
        assert!(result.is_err());
    }

    #[test]
    fn test_tagger_reads_repo_config() {
        let temp_dir = setup_test_repo();
        let repo = Git2Repository::open(temp_dir.path()).expect("Should open scratch repo");

        let tagger = repo.tagger().expect("Should resolve tagger identity");
        assert_eq!(tagger.name, "Test User");
        assert_eq!(tagger.email, "test@example.com");
    }

    #[test]
    fn test_head_oid_matches_commit() {
        let temp_dir = setup_test_repo();
        let repo = Git2Repository::open(temp_dir.path()).expect("Should open scratch repo");

        let head = repo.head_oid().expect("Should resolve HEAD");
        let expected = repo.find_tag_oid("v1.0.0").unwrap().unwrap();
        assert_eq!(head, expected);
    }

    #[test]
    #[serial]
    fn test_open_discovers_from_subdirectory() {
        let temp_dir = setup_test_repo();
        let sub_dir = temp_dir.path().join("nested");
        fs::create_dir(&sub_dir).expect("Could not create subdirectory");

        let original_dir = env::current_dir().unwrap();
        env::set_current_dir(&sub_dir).expect("Could not change to subdirectory");

        let result = Git2Repository::open(".");
        assert!(
            result.is_ok(),
            "Git2Repository::open(\".\") should discover the enclosing repo"
        );

        env::set_current_dir(original_dir).unwrap();
    }
}
