/*!
 * End-to-end manuscript counting tests
 *
 * Exercise the whole flow a user sees: a drafts directory with Markdown
 * manuscripts and a directory override, counted through the controller.
 */

use anyhow::Result;
use genko::app_config::{Config, DIRECTORY_CONFIG_FILENAME};
use genko::app_controller::Controller;
use genko::status::{StatusLine, ThresholdState};
use crate::common;

/// Test a realistic draft directory end to end
#[test]
fn test_workflow_withDraftDirectory_shouldAggregateAndRender() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(
        &dir,
        "01.md",
        "## 第一章\n\n太郎は「こんにちは」と言った。\n",
    )?;
    common::create_test_file(
        &dir,
        "02.md",
        "吾輩は猫である。名前はまだ無い。\n\n<!-- 推敲中 -->\n",
    )?;

    let mut config = Config::default();
    config.target_words = 100;
    let controller = Controller::with_config(config);

    let aggregate = controller.count_directory(&dir);
    assert_eq!(aggregate.files, 2);
    // 01.md: heading dropped, 12 characters; 02.md: comment dropped, 14
    assert_eq!(aggregate.counts.total, 26);
    assert_eq!(aggregate.counts.dialogue, 5);
    assert_eq!(aggregate.counts.narration, 21);

    let line = StatusLine::render(aggregate.counts.total, 0, 100);
    assert_eq!(line, "26字 / 100字 (26%)");

    Ok(())
}

/// Test per-file counting with the sibling directory total
#[test]
fn test_workflow_withSiblingFiles_shouldMatchManualSum() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let a = common::create_test_file(&dir, "a.md", "太郎は「こんにちは」と言った。")?;
    common::create_test_file(&dir, "b.md", "吾輩は猫である。")?;

    let controller = Controller::new();
    let detail = controller.count_file(&a)?;
    let directory_total = controller.sibling_total(&a);

    assert_eq!(detail.counts.total, 12);
    assert_eq!(directory_total, 12 + 7);

    let line = StatusLine::render(detail.counts.total, directory_total, 0);
    assert_eq!(line, "12字 | 19字");

    Ok(())
}

/// Test the directory override disables counting for its directory
#[test]
fn test_workflow_withDisablingOverride_shouldTurnCountingOff() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, DIRECTORY_CONFIG_FILENAME, r#"{"enabled": false}"#)?;
    let manuscript = common::create_test_manuscript(&dir, "a.md")?;

    let controller = Controller::new();
    let effective = controller.effective_config_for(&manuscript);

    assert!(!effective.enabled);

    Ok(())
}

/// Test override thresholds drive the threshold state
#[test]
fn test_workflow_withOverrideThresholds_shouldEvaluateState() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(
        &dir,
        DIRECTORY_CONFIG_FILENAME,
        r#"{"targetWords": 10, "minWords": 5, "showBackgroundColor": true}"#,
    )?;
    let manuscript = common::create_test_file(&dir, "a.md", "吾輩は猫である。")?;

    let controller = Controller::new();
    let effective = controller.effective_config_for(&manuscript);
    let detail = controller.count_file(&manuscript)?;

    assert!(effective.show_background_color);
    // 7 characters, between min 5 and target 10
    assert_eq!(
        ThresholdState::from_config(detail.counts.total, &effective),
        ThresholdState::InProgress
    );

    Ok(())
}

/// Test order independence of directory aggregation
#[test]
fn test_workflow_aggregation_shouldBeOrderIndependent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir_a = temp_dir.path().join("a");
    let dir_b = temp_dir.path().join("b");
    std::fs::create_dir_all(&dir_a)?;
    std::fs::create_dir_all(&dir_b)?;

    // Same contents, opposite filename order
    common::create_test_file(&dir_a, "1.md", "太郎は「こんにちは」と言った。")?;
    common::create_test_file(&dir_a, "2.md", "吾輩は猫である。")?;
    common::create_test_file(&dir_b, "1.md", "吾輩は猫である。")?;
    common::create_test_file(&dir_b, "2.md", "太郎は「こんにちは」と言った。")?;

    let controller = Controller::new();
    let first = controller.count_directory(&dir_a);
    let second = controller.count_directory(&dir_b);

    assert_eq!(first.counts, second.counts);
    assert_eq!(first.scripts, second.scripts);

    Ok(())
}
