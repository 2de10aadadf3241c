//! Demo data for presentations and the CLI

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use mindconnect_store::{
    CheckinRecord, MoodScore, Repository, SupportCategory, SupportConnection, UserProfile,
};

const DEMO_CHECKINS: i64 = 12;

/// Seed `repo` with a demo user, a fortnight of check-ins and two connections
pub fn seed_demo(repo: &mut Repository, now: DateTime<Utc>) {
    seed_demo_with_rng(repo, now, &mut rand::thread_rng());
}

pub fn seed_demo_with_rng<R: Rng + ?Sized>(repo: &mut Repository, now: DateTime<Utc>, rng: &mut R) {
    let profile = UserProfile::new("Demo User", "demo@mindconnect.org", now - Duration::days(15))
        .with_location("Lusaka, Zambia")
        .with_preference(SupportCategory::Peer)
        .with_preference(SupportCategory::Counseling)
        .with_preference(SupportCategory::Healthcare);
    repo.set_active_profile(profile);

    for days_ago in (0..DEMO_CHECKINS).rev() {
        let mood = MoodScore::clamped(rng.gen_range(1..=10));
        repo.append_checkin(
            CheckinRecord::new(mood, now - Duration::days(days_ago))
                .with_activity("exercise")
                .with_activity("selfcare")
                .with_notes("Sample check-in note"),
        );
    }

    repo.append_connection(SupportConnection::new(
        SupportCategory::Peer,
        now - Duration::days(5),
    ));
    repo.append_connection(SupportConnection::new(
        SupportCategory::Counseling,
        now - Duration::days(3),
    ));
}
