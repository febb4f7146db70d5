use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_documents_the_controls() {
    Command::cargo_bin("pubshelf")
        .expect("binary builds")
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--server")
                .and(predicate::str::contains("--author"))
                .and(predicate::str::contains("--sort"))
                .and(predicate::str::contains("--page-size"))
                .and(predicate::str::contains("--once")),
        );
}

#[test]
fn rejects_unknown_sort_tokens() {
    Command::cargo_bin("pubshelf")
        .expect("binary builds")
        .args(["--sort", "alphabetical", "--once"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort criteria"));
}

#[test]
fn unreachable_server_still_renders_an_empty_page() {
    // Startup-fault policy: log and continue with an empty list.
    Command::cargo_bin("pubshelf")
        .expect("binary builds")
        .args(["--server", "http://127.0.0.1:9", "--once"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("No publications to display.")
                .and(predicate::str::contains("Page 1 of 1")),
        );
}
