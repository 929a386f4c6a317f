use super::*;
use crate::state::leaderboard::{LeaderboardUser, seed_users};

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_accepts_stored_roster() {
    let raw = r#"[{"id":"1","username":"You","xp":40,"isCurrentUser":true}]"#;
    let users = decode_json::<Vec<LeaderboardUser>>(raw).expect("valid roster");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].xp, 40);
}

#[test]
fn decode_rejects_corrupt_content() {
    let corrupt = [
        "not json",
        "",
        r#"[{"id":"1"}]"#,
        r#"[{"id":"1","username":"You","xp":-5,"isCurrentUser":true}]"#,
        r#"{"id":"1","username":"You","xp":0,"isCurrentUser":true}"#,
        r#"[{"id":"1","username":"You","xp":0,"is_current_user":true}]"#,
    ];
    for raw in corrupt {
        assert_eq!(decode_json::<Vec<LeaderboardUser>>(raw), None, "accepted {raw:?}");
    }
}

#[test]
fn decode_then_validate_matches_seed_format() {
    let raw = serde_json::to_string(&seed_users()).expect("serialize");
    assert_eq!(decode_json::<Vec<LeaderboardUser>>(&raw), Some(seed_users()));
}

// =============================================================
// SSR stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_json_is_none_outside_the_browser() {
    assert_eq!(load_json::<Vec<u32>>("leaderboardUsers"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn save_and_remove_are_noops_but_callable() {
    save_json("leaderboardUsers", &vec![1_u32, 2, 3]);
    remove_key("leaderboardUsers");
    assert_eq!(load_json::<Vec<u32>>("leaderboardUsers"), None);
}
