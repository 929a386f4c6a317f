//! XP leaderboard: mock users, the current user's XP, rankings, and the
//! transient XP/notification banners.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `LeaderboardState` lives in an `RwSignal` provided by `App`, so the
//! leaderboard page, event detail page, and banner host all mutate the same
//! holder through its methods. Persistence happens outside: the app reads
//! `pending_write()` and mirrors it into localStorage.
//!
//! DESIGN
//! ======
//! The state starts from the seed list and only adopts stored users after
//! `rehydrate`, which the browser calls once after hydration. Until then
//! `pending_write()` is `None` so the seed can never overwrite a saved board.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::banner::{Banner, BannerTicket};
use crate::consts::{NOTIFICATION_MS, RANKS_PER_PAGE, XP_ANIMATION_MS, XP_HOST_EVENT, XP_JOIN_EVENT};
use crate::data::types::ItemId;

/// A leaderboard row as stored in localStorage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardUser {
    pub id: String,
    pub username: String,
    pub xp: u32,
    pub is_current_user: bool,
}

impl LeaderboardUser {
    fn new(id: &str, username: &str, xp: u32, is_current_user: bool) -> Self {
        Self { id: id.to_owned(), username: username.to_owned(), xp, is_current_user }
    }
}

/// Fixed starting roster; "You" is the current browser's user.
pub fn seed_users() -> Vec<LeaderboardUser> {
    vec![
        LeaderboardUser::new("1", "You", 0, true),
        LeaderboardUser::new("2", "Maria", 120, false),
        LeaderboardUser::new("3", "Alex", 85, false),
        LeaderboardUser::new("4", "Sam", 200, false),
        LeaderboardUser::new("5", "Lena", 65, false),
        LeaderboardUser::new("6", "John", 150, false),
        LeaderboardUser::new("7", "Sarah", 95, false),
        LeaderboardUser::new("8", "Mike", 110, false),
        LeaderboardUser::new("9", "Emma", 75, false),
        LeaderboardUser::new("10", "David", 130, false),
        LeaderboardUser::new("11", "Lisa", 88, false),
        LeaderboardUser::new("12", "Chris", 142, false),
    ]
}

/// Stored rosters must be non-empty, have unique ids, and flag at most one
/// current user.
fn is_valid_roster(users: &[LeaderboardUser]) -> bool {
    let mut ids = HashSet::new();
    !users.is_empty()
        && users.iter().all(|u| ids.insert(u.id.as_str()))
        && users.iter().filter(|u| u.is_current_user).count() <= 1
}

/// Payload of the "+N XP" pop-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XpAward {
    pub amount: u32,
    pub reason: String,
}

/// Simulated actions that earn XP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XpAction {
    JoinEvent,
    HostEvent,
}

impl XpAction {
    pub fn xp(self) -> u32 {
        match self {
            Self::JoinEvent => XP_JOIN_EVENT,
            Self::HostEvent => XP_HOST_EVENT,
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            Self::JoinEvent => "Joining Event",
            Self::HostEvent => "Hosting Event",
        }
    }

    fn notice(self) -> &'static str {
        match self {
            Self::JoinEvent => "Successfully joined an event!",
            Self::HostEvent => "Successfully hosted an event!",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Info,
}

impl NotificationKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Gold => "🥇",
            Self::Silver => "🥈",
            Self::Bronze => "🥉",
        }
    }

    /// Shadow class used by ranking rows and podium cards.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Gold => "rank-gold",
            Self::Silver => "rank-silver",
            Self::Bronze => "rank-bronze",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankBadge {
    Medal(Medal),
    /// 1-based position, always 4 or more.
    Numeric(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedUser {
    pub position: usize,
    pub badge: RankBadge,
    pub user: LeaderboardUser,
}

/// Stable descending sort by XP; ties keep roster order.
pub fn rank_users(users: &[LeaderboardUser]) -> Vec<RankedUser> {
    let mut sorted = users.to_vec();
    sorted.sort_by(|a, b| b.xp.cmp(&a.xp));
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, user)| {
            let position = index + 1;
            let badge = match position {
                1 => RankBadge::Medal(Medal::Gold),
                2 => RankBadge::Medal(Medal::Silver),
                3 => RankBadge::Medal(Medal::Bronze),
                n => RankBadge::Numeric(n),
            };
            RankedUser { position, badge, user }
        })
        .collect()
}

/// What the persistence effect should do with localStorage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreWrite {
    Save(Vec<LeaderboardUser>),
    Erase,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardState {
    users: Vec<LeaderboardUser>,
    xp_gained: u32,
    xp_animation: Banner<XpAward>,
    notification: Banner<Notification>,
    ranking_page: usize,
    /// Events whose join XP was already paid out since the last reset.
    joined_events: HashSet<ItemId>,
    hydrated: bool,
    erased: bool,
}

impl Default for LeaderboardState {
    fn default() -> Self {
        Self {
            users: seed_users(),
            xp_gained: 0,
            xp_animation: Banner::new(XP_ANIMATION_MS),
            notification: Banner::new(NOTIFICATION_MS),
            ranking_page: 1,
            joined_events: HashSet::new(),
            hydrated: false,
            erased: false,
        }
    }
}

impl LeaderboardState {
    /// Adopt the stored roster, or keep the seed when it is absent or invalid.
    pub fn rehydrate(&mut self, stored: Option<Vec<LeaderboardUser>>) {
        match stored {
            Some(users) if is_valid_roster(&users) => self.users = users,
            Some(_) => {
                leptos::logging::warn!("discarding invalid stored leaderboard; using seed users");
                self.users = seed_users();
            }
            None => self.users = seed_users(),
        }
        self.hydrated = true;
        self.erased = false;
        self.ranking_page = 1;
    }

    pub fn users(&self) -> &[LeaderboardUser] {
        &self.users
    }

    pub fn user(&self, id: &str) -> Option<&LeaderboardUser> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn current_user(&self) -> Option<&LeaderboardUser> {
        self.users.iter().find(|u| u.is_current_user)
    }

    /// XP awarded this session, across all `add_xp` calls since the last reset.
    pub fn xp_gained(&self) -> u32 {
        self.xp_gained
    }

    pub fn total_users(&self) -> usize {
        self.users.len()
    }

    pub fn rankings(&self) -> Vec<RankedUser> {
        rank_users(&self.users)
    }

    /// Top three ranked users.
    pub fn podium(&self) -> Vec<RankedUser> {
        let mut ranked = self.rankings();
        ranked.truncate(3);
        ranked
    }

    /// 1-based rank of the current user.
    pub fn current_user_rank(&self) -> Option<usize> {
        self.rankings().into_iter().find(|r| r.user.is_current_user).map(|r| r.position)
    }

    pub fn xp_animation(&self) -> &Banner<XpAward> {
        &self.xp_animation
    }

    pub fn notification(&self) -> &Banner<Notification> {
        &self.notification
    }

    /// Add `amount` XP to the current user and pop the XP banner.
    pub fn add_xp(&mut self, amount: u32, reason: &str, now_ms: f64) -> BannerTicket {
        for user in self.users.iter_mut().filter(|u| u.is_current_user) {
            user.xp = user.xp.saturating_add(amount);
        }
        self.xp_gained = self.xp_gained.saturating_add(amount);
        self.users_changed();
        self.xp_animation.trigger(XpAward { amount, reason: reason.to_owned() }, now_ms)
    }

    /// Award the XP for `action` and raise its success notification.
    pub fn record(&mut self, action: XpAction, now_ms: f64) {
        self.add_xp(action.xp(), action.reason(), now_ms);
        self.show_notification(action.notice(), NotificationKind::Success, now_ms);
    }

    /// Register for `event_id`. Only the first registration per event pays
    /// out; returns whether XP was awarded.
    pub fn join_event(&mut self, event_id: ItemId, now_ms: f64) -> bool {
        if !self.joined_events.insert(event_id) {
            return false;
        }
        self.record(XpAction::JoinEvent, now_ms);
        true
    }

    pub fn has_joined(&self, event_id: ItemId) -> bool {
        self.joined_events.contains(&event_id)
    }

    pub fn show_notification(&mut self, message: &str, kind: NotificationKind, now_ms: f64) -> BannerTicket {
        self.notification.trigger(Notification { message: message.to_owned(), kind }, now_ms)
    }

    /// Back to the seed roster with a zeroed gained counter; the stored copy
    /// is erased.
    pub fn reset_xp(&mut self, now_ms: f64) -> BannerTicket {
        self.users = seed_users();
        self.xp_gained = 0;
        self.joined_events.clear();
        self.users_changed();
        self.erased = true;
        self.show_notification("XP reset to initial values", NotificationKind::Info, now_ms)
    }

    pub fn expire_xp_animation(&mut self, seq: u64) -> bool {
        self.xp_animation.expire(seq)
    }

    pub fn expire_notification(&mut self, seq: u64) -> bool {
        self.notification.expire(seq)
    }

    /// Advance both banners to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) {
        self.xp_animation.tick(now_ms);
        self.notification.tick(now_ms);
    }

    fn users_changed(&mut self) {
        self.erased = false;
        self.ranking_page = 1;
    }

    /// Storage action reflecting the latest roster, once hydrated.
    pub fn pending_write(&self) -> Option<StoreWrite> {
        if !self.hydrated {
            return None;
        }
        if self.erased {
            Some(StoreWrite::Erase)
        } else {
            Some(StoreWrite::Save(self.users.clone()))
        }
    }

    // ── Ranking pagination ──────────────────────────────────────

    pub fn ranking_page(&self) -> usize {
        self.ranking_page
    }

    pub fn ranking_page_count(&self) -> usize {
        self.users.len().div_ceil(RANKS_PER_PAGE)
    }

    pub fn ranking_page_items(&self) -> Vec<RankedUser> {
        let start = (self.ranking_page - 1) * RANKS_PER_PAGE;
        self.rankings().into_iter().skip(start).take(RANKS_PER_PAGE).collect()
    }

    pub fn next_ranking_page(&mut self) {
        if self.ranking_page < self.ranking_page_count() {
            self.ranking_page += 1;
        }
    }

    pub fn prev_ranking_page(&mut self) {
        if self.ranking_page > 1 {
            self.ranking_page -= 1;
        }
    }
}
