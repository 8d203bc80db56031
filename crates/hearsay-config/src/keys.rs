//! The static preference table: every recognized key, its group, its
//! on-disk field name, and its default.

/// A recognized preference key.
///
/// Each key belongs to exactly one group and has exactly one on-disk field
/// name; both are fixed by the tables below, never derived from input. Keys
/// in different groups may share a field name without colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    // ui
    /// Show the splash logo on startup.
    Splash,
    /// Sound the terminal bell on new messages.
    Beep,
    /// Active colour theme name.
    Theme,
    /// Check for a newer release on startup.
    Vercheck,
    /// Show the version in the titlebar.
    TitlebarVersion,
    /// Flash the terminal on new messages.
    Flash,
    /// Show contact typing state in the titlebar.
    Intype,
    /// Show recent history when opening a window.
    History,
    /// Enable mouse handling.
    Mouse,
    /// Show contact status lines.
    Statuses,

    // chatstates
    /// Send chat state notifications.
    States,
    /// Send typing notifications.
    Outtype,
    /// Minutes of inactivity before sending "gone".
    Gone,

    // notifications
    /// Notify when a contact is typing.
    NotifyTyping,
    /// Notify on new messages.
    NotifyMessage,
    /// Notify on room invites.
    NotifyInvite,
    /// Notify on subscription requests.
    NotifySub,
    /// Seconds between reminder notifications for unread messages.
    NotifyRemind,

    // logging
    /// Log chat messages.
    Chlog,
    /// Log room messages.
    Grlog,
    /// Maximum log file size in bytes.
    LogMaxSize,

    // presence
    /// Check for keyboard inactivity.
    AutoawayCheck,
    /// Auto-away mode ("off", "away", "idle").
    AutoawayMode,
    /// Status message to set when going auto-away.
    AutoawayMessage,
    /// Minutes of inactivity before going auto-away.
    AutoawayTime,
    /// Presence priority.
    Priority,

    // connection
    /// Seconds between reconnect attempts.
    Reconnect,
    /// Seconds between keepalive pings.
    Autoping,
}

impl Preference {
    /// The group this key is stored under.
    pub fn group(self) -> &'static str {
        match self {
            Self::Splash
            | Self::Beep
            | Self::Theme
            | Self::Vercheck
            | Self::TitlebarVersion
            | Self::Flash
            | Self::Intype
            | Self::History
            | Self::Mouse
            | Self::Statuses => "ui",
            Self::States | Self::Outtype | Self::Gone => "chatstates",
            Self::NotifyTyping
            | Self::NotifyMessage
            | Self::NotifyInvite
            | Self::NotifySub
            | Self::NotifyRemind => "notifications",
            Self::Chlog | Self::Grlog | Self::LogMaxSize => "logging",
            Self::AutoawayCheck
            | Self::AutoawayMode
            | Self::AutoawayMessage
            | Self::AutoawayTime
            | Self::Priority => "presence",
            Self::Reconnect | Self::Autoping => "connection",
        }
    }

    /// The on-disk field name within the group.
    pub fn key(self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Beep => "beep",
            Self::Theme => "theme",
            Self::Vercheck => "vercheck",
            Self::TitlebarVersion => "titlebar.version",
            Self::Flash => "flash",
            Self::Intype => "intype",
            Self::History => "history",
            Self::Mouse => "mouse",
            Self::Statuses => "statuses",
            Self::States => "enabled",
            Self::Outtype => "outtype",
            Self::Gone => "gone",
            Self::NotifyTyping => "typing",
            Self::NotifyMessage => "message",
            Self::NotifyInvite => "invite",
            Self::NotifySub => "sub",
            Self::NotifyRemind => "remind",
            Self::Chlog => "chlog",
            Self::Grlog => "grlog",
            Self::LogMaxSize => "maxsize",
            Self::AutoawayCheck => "autoaway.check",
            Self::AutoawayMode => "autoaway.mode",
            Self::AutoawayMessage => "autoaway.message",
            Self::AutoawayTime => "autoaway.time",
            Self::Priority => "priority",
            Self::Reconnect => "reconnect",
            Self::Autoping => "autoping",
        }
    }

    /// Default for boolean keys. Everything is off by default except status
    /// lines and the auto-away inactivity check.
    pub fn default_boolean(self) -> bool {
        matches!(self, Self::Statuses | Self::AutoawayCheck)
    }

    /// Default for string keys, where one exists.
    pub fn default_string(self) -> Option<&'static str> {
        match self {
            Self::AutoawayMode => Some("off"),
            _ => None,
        }
    }

    /// Default for integer keys.
    pub fn default_int(self) -> i64 {
        0
    }
}
