//! Shared builders for reconciler integration tests
#![allow(dead_code)]

use shared::{InsertAck, MatchRecord, RecordId, Submission, Team, TeamPair};

/// Quiet tracing for test runs; later calls are no-ops.
pub fn init_logging() {
    shared::logging::init_tracing("warn");
}

pub fn team(name: &str) -> Team {
    Team {
        id: None,
        name: name.to_string(),
        tag: Some(name.chars().take(3).collect::<String>().to_uppercase()),
        logo: None,
        color: None,
        standing: None,
        coach: None,
    }
}

pub fn pair(blue: &str, red: &str) -> TeamPair {
    TeamPair {
        blue_team: team(blue),
        red_team: team(red),
    }
}

pub fn submission(blue: &str, red: &str, best_of: u32, round_of: u32) -> Submission {
    Submission {
        teams: pair(blue, red),
        best_of,
        round_of,
    }
}

pub fn match_record(id: &str, blue: &str, red: &str, best_of: u32, round_of: u32, date: i64) -> MatchRecord {
    MatchRecord {
        id: RecordId::new(id),
        teams: pair(blue, red),
        best_of,
        round_of,
        date,
    }
}

pub fn ack(id: &str) -> InsertAck {
    InsertAck {
        id: Some(RecordId::new(id)),
    }
}

pub fn empty_ack() -> InsertAck {
    InsertAck { id: None }
}
