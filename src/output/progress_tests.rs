use super::*;

#[test]
fn hidden_in_quiet_mode() {
    let progress = CheckProgress::new(100, true);
    progress.start_file(Path::new("a.py"));
    progress.inc();
    progress.inc();
    assert_eq!(progress.position(), 2);
    progress.finish();
}

#[test]
fn hidden_when_not_a_tty() {
    let progress = CheckProgress::new_with_visibility(3, false, false);
    for _ in 0..3 {
        progress.inc();
    }
    assert_eq!(progress.position(), 3);
    progress.finish();
}

#[test]
fn visible_bar_counts_files() {
    let progress = CheckProgress::new_with_visibility(10, false, true);
    progress.start_file(Path::new("src/app.py"));
    progress.inc();
    assert_eq!(progress.position(), 1);
    progress.finish();
}
