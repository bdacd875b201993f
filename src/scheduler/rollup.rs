//! User story roll-up.
//!
//! After a story's tasks have been attempted, derives the story's
//! assignee, start/end span, and size estimate from the tasks that
//! reached the scheduled state. A story with no scheduled task is left
//! untouched.

use std::collections::HashMap;

use tracing::info;

use crate::models::UserStory;

/// Hours→story-points conversion table.
///
/// Modified-Fibonacci bands used by the planning process; 12 estimated
/// hours maps to 8 points.
pub fn story_points_for_hours(hours: f64) -> f64 {
    match hours {
        h if h <= 1.0 => 0.5,
        h if h <= 2.0 => 1.0,
        h if h <= 3.0 => 2.0,
        h if h <= 5.0 => 3.0,
        h if h <= 9.0 => 5.0,
        h if h <= 14.0 => 8.0,
        h if h <= 23.0 => 13.0,
        h if h <= 37.0 => 21.0,
        h if h <= 60.0 => 34.0,
        _ => 55.0,
    }
}

/// Rolls scheduled-task results up into the story record.
///
/// - assignee: the executor with the most scheduled tasks, ties broken by
///   whichever executor's task appears first in declared order
/// - start/end: the span covered by scheduled tasks
/// - story points: total scheduled effort through the conversion table
pub fn roll_up_story(story: &mut UserStory) {
    let scheduled: Vec<_> = story.tasks.iter().filter(|t| t.is_scheduled()).collect();
    if scheduled.is_empty() {
        return;
    }

    // Count tasks per assignee, remembering first appearance for tie-breaks
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, task) in scheduled.iter().enumerate() {
        if let Some(assignee) = task.assignee.as_deref() {
            let entry = counts.entry(assignee).or_insert((0, position));
            entry.0 += 1;
        }
    }

    let assignee = counts
        .iter()
        .min_by_key(|(_, &(count, first))| (std::cmp::Reverse(count), first))
        .map(|(&id, _)| id.to_string());

    let start = scheduled.iter().filter_map(|t| t.start).min();
    let end = scheduled.iter().filter_map(|t| t.end).max();
    let total_hours: f64 = scheduled.iter().map(|t| t.estimated_hours).sum();

    story.assignee = assignee;
    story.start = start;
    story.end = end;
    story.story_points = story_points_for_hours(total_hours);

    info!(
        story = %story.id,
        assignee = story.assignee.as_deref().unwrap_or("-"),
        points = story.story_points,
        total_hours,
        "story rolled up"
    );
}
