//! Speech-toggle button delegating to an optional external speech helper.

/// The page's speech helper, if one has been loaded.
pub trait SpeechHelper {
    fn toggle_speech(&mut self);
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
}

impl NoticeLevel {
    /// Name the page's message helper expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
        }
    }
}

/// Message to show after a toggle attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: &'static str,
    pub level: NoticeLevel,
}

pub const SPEECH_ON: &str = "语音助手已开启";
pub const SPEECH_OFF: &str = "语音助手已关闭";
pub const SPEECH_NOT_READY: &str = "语音助手初始化中...";

/// Active state of the speech-toggle button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeechToggle {
    active: bool,
}

impl SpeechToggle {
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Forward a button press. Without a helper nothing changes and the user
    /// is told the assistant is still loading.
    pub fn toggle(&mut self, helper: Option<&mut dyn SpeechHelper>) -> Notice {
        let Some(helper) = helper else {
            return Notice {
                message: SPEECH_NOT_READY,
                level: NoticeLevel::Warning,
            };
        };
        helper.toggle_speech();
        self.active = !self.active;
        if self.active {
            Notice {
                message: SPEECH_ON,
                level: NoticeLevel::Success,
            }
        } else {
            Notice {
                message: SPEECH_OFF,
                level: NoticeLevel::Info,
            }
        }
    }
}
