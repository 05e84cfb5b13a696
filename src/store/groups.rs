//! Group model
//!
//! Scheduled community events with per-event attendance flags. The member
//! ratio is display data seeded with the event and is not derived from the
//! attendance flag.

use crate::{NidhiError, Result};

/// A scheduled community event with attendance tracking
#[derive(Debug, Clone)]
pub struct GroupActivity {
    /// Event title, e.g. "Weekly Meeting"
    pub title: String,
    /// Schedule label, e.g. "Sunday, 10:00 AM"
    pub time: String,
    /// Display ratio "attending/total", e.g. "12/15"
    pub member_ratio: String,
    /// Whether the user has marked themselves attending
    pub attending: bool,
}

impl GroupActivity {
    /// Create a group activity
    pub fn new(title: &str, time: &str, member_ratio: &str, attending: bool) -> Self {
        Self {
            title: title.to_string(),
            time: time.to_string(),
            member_ratio: member_ratio.to_string(),
            attending,
        }
    }
}

/// The session's ordered list of group activities
#[derive(Debug)]
pub struct GroupBoard {
    activities: Vec<GroupActivity>,
}

impl GroupBoard {
    /// Create the board for a session
    pub fn new(activities: Vec<GroupActivity>) -> Self {
        Self { activities }
    }

    /// Activities in display order
    pub fn activities(&self) -> &[GroupActivity] {
        &self.activities
    }

    /// Flip the attendance flag of an event and return the new value
    pub fn toggle_attendance(&mut self, index: usize) -> Result<bool> {
        let len = self.activities.len();
        let activity = self
            .activities
            .get_mut(index)
            .ok_or(NidhiError::IndexOutOfRange {
                collection: "group activity",
                index,
                len,
            })?;
        activity.attending = !activity.attending;
        Ok(activity.attending)
    }

    /// Number of events the user is currently attending
    pub fn attending_count(&self) -> usize {
        self.activities.iter().filter(|a| a.attending).count()
    }
}
