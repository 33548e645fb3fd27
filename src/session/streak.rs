use crate::error::StorageError;

/// Name of the cookie holding the quiz streak.
pub const STREAK_COOKIE: &str = "quadricStreak";

/// Persists the quiz streak across sessions.
pub trait StreakStore {
    /// Reads the stored streak; absent or unreadable values read as `0`.
    fn load(&self) -> u32;

    /// Stores `streak` with no expiry.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be written.
    fn save(&mut self, streak: u32) -> Result<(), StorageError>;
}

/// Streak store backed by a `name=value; name=value` cookie string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieStreakStore {
    cookie: String,
}

impl CookieStreakStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing cookie string.
    #[must_use]
    pub fn with_cookie(cookie: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
        }
    }

    /// The current cookie string.
    #[must_use]
    pub fn cookie(&self) -> &str {
        &self.cookie
    }

    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cookie
            .split(';')
            .filter_map(|pair| pair.split_once('='))
            .map(|(name, value)| (name.trim(), value))
    }
}

impl StreakStore for CookieStreakStore {
    fn load(&self) -> u32 {
        self.pairs()
            .find(|(name, _)| *name == STREAK_COOKIE)
            .map_or(0, |(_, value)| parse_streak(value))
    }

    fn save(&mut self, streak: u32) -> Result<(), StorageError> {
        let entry = format!("{STREAK_COOKIE}={streak}");
        let mut replaced = false;
        let mut pairs: Vec<String> = self
            .cookie
            .split(';')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((name, _)) if name.trim() == STREAK_COOKIE => {
                    replaced = true;
                    entry.clone()
                }
                _ => pair.to_owned(),
            })
            .collect();
        if !replaced {
            pairs.push(entry);
        }
        self.cookie = pairs.join("; ");
        Ok(())
    }
}

/// Reads the leading decimal digits of `value`, ignoring leading
/// whitespace and anything after the digits. Negative, missing or
/// overflowing values read as `0`.
#[must_use]
pub fn parse_streak(value: &str) -> u32 {
    let trimmed = value.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().unwrap_or(0)
}

/// In-memory store, useful when no persistence is wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStreakStore {
    pub streak: u32,
}

impl StreakStore for MemoryStreakStore {
    fn load(&self) -> u32 {
        self.streak
    }

    fn save(&mut self, streak: u32) -> Result<(), StorageError> {
        self.streak = streak;
        Ok(())
    }
}
