#[derive(Debug, Clone)]
pub enum Message {
    // === SLOT MESSAGES ===
    SlotAdded(String),   // "HH:MM"
    SlotUpdated(String), // "HH:MM"
    SlotDeleted(String), // id
    SlotNotFound(String),
    SlotDurationTooLong(i64), // minutes
    NoSlotsDefined,

    // === TIMELINE MESSAGES ===
    TimelineLoadFailed(String), // error
    TimelineSaveFailed(String), // error
    TimelineValid,
    ValidationIssuesFound(usize), // count

    // === NEXT BREAK MESSAGES ===
    NextBreakAt {
        occurrence: String, // "YYYY-MM-DD HH:MM"
        time_until: String, // "HH:MM"
    },
    NoUpcomingBreaks,
    BreakDue {
        message: String,
        duration: i64, // minutes
    },

    // === WATCHER MESSAGES ===
    WatcherStarted(u64), // poll interval ms
    WatcherStopped,
    WatcherCtrlCListenFailed(String), // error
    InvalidPollInterval,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleBreaks,
    ConfigModuleNotifier,

    // === PROMPTS ===
    PromptSelectModules,
    PromptBreakDuration,
    PromptBreakMessage,
    PromptPollInterval,
    PromptSoundEnabled,

    // === GENERAL MESSAGES ===
    InvalidTimeFormat(String),
}
