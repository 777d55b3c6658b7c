//! App-level notice banner state.
//!
//! Flows whose page unmounts on completion (logout, a login that left no
//! session) report failures here so the message survives the route change.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub message: Option<String>,
}

impl NoticeState {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}
