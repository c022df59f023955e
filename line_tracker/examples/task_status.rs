// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `cargo run --example task_status`. Logs go to `task_status.log`.

use r3bl_line_tracker::{BasicColor, ClearDirection, CrosstermTerminal, LineCursorTracker,
                        SgrFormatter, Style, StyledLine, TracingConfig};
use std::{thread::sleep, time::Duration};

const TASKS: [&str; 3] = ["fetch", "compile", "test"];

fn main() -> miette::Result<()> {
    TracingConfig::new_file_logger("task_status.log").install_global()?;

    let mut tracker = LineCursorTracker::new(CrosstermTerminal::new_stdout());
    let formatter = SgrFormatter::degrading();

    tracker.append_styled_line(
        &StyledLine::default().with("Tasks", Style::default().bold().underline()),
        &formatter,
    )?;
    for task in TASKS {
        tracker.append_styled_line(&status_line(task, "pending", BasicColor::Yellow), &formatter)?;
    }

    for (index, task) in TASKS.iter().enumerate() {
        sleep(Duration::from_millis(500));
        tracker.replace_styled_line(index + 1, &status_line(task, "done", BasicColor::Green), &formatter)?;
    }

    tracker.append_line("cleaning up")?;
    sleep(Duration::from_millis(500));
    tracker.remove_last_line()?;
    tracker.clear_line(0, ClearDirection::EntireLine)?;
    tracker.replace_line(0, "All tasks finished")?;

    tracing::info!(message = "finished", line_count = tracker.line_count());
    Ok(())
}

fn status_line(task: &str, status: &str, color: BasicColor) -> StyledLine {
    StyledLine::default()
        .with(&format!("[{status:>7}]"), Style::default().fg(color))
        .with_plain(" ")
        .with_plain(task)
}
