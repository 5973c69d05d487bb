use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCategory {
    Streak,
    Workout,
    Progress,
    Milestone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AchievementTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl AchievementTier {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AchievementTier::Bronze => "Bronze",
            AchievementTier::Silver => "Silver",
            AchievementTier::Gold => "Gold",
            AchievementTier::Platinum => "Platinum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: AchievementCategory,
    pub tier: AchievementTier,
    pub requirement: u32,
}

/// All achievements, in display order. `next_achievement` breaks ties by
/// this order, so it must stay stable.
pub const DEFINITIONS: [AchievementDefinition; 12] = [
    AchievementDefinition {
        id: "streak_3",
        name: "Three in a Row",
        category: AchievementCategory::Streak,
        tier: AchievementTier::Bronze,
        requirement: 3,
    },
    AchievementDefinition {
        id: "streak_7",
        name: "Full Week",
        category: AchievementCategory::Streak,
        tier: AchievementTier::Silver,
        requirement: 7,
    },
    AchievementDefinition {
        id: "streak_14",
        name: "Fortnight Fighter",
        category: AchievementCategory::Streak,
        tier: AchievementTier::Gold,
        requirement: 14,
    },
    AchievementDefinition {
        id: "streak_30",
        name: "Monthly Habit",
        category: AchievementCategory::Streak,
        tier: AchievementTier::Platinum,
        requirement: 30,
    },
    AchievementDefinition {
        id: "workouts_10",
        name: "Getting Started",
        category: AchievementCategory::Workout,
        tier: AchievementTier::Bronze,
        requirement: 10,
    },
    AchievementDefinition {
        id: "workouts_25",
        name: "Regular",
        category: AchievementCategory::Workout,
        tier: AchievementTier::Silver,
        requirement: 25,
    },
    AchievementDefinition {
        id: "workouts_50",
        name: "Dedicated",
        category: AchievementCategory::Workout,
        tier: AchievementTier::Gold,
        requirement: 50,
    },
    AchievementDefinition {
        id: "workouts_100",
        name: "Century Club",
        category: AchievementCategory::Workout,
        tier: AchievementTier::Platinum,
        requirement: 100,
    },
    AchievementDefinition {
        id: "progress_5",
        name: "Tracking",
        category: AchievementCategory::Progress,
        tier: AchievementTier::Bronze,
        requirement: 5,
    },
    AchievementDefinition {
        id: "progress_15",
        name: "Data Driven",
        category: AchievementCategory::Progress,
        tier: AchievementTier::Silver,
        requirement: 15,
    },
    AchievementDefinition {
        id: "progress_30",
        name: "Quantified Self",
        category: AchievementCategory::Progress,
        tier: AchievementTier::Gold,
        requirement: 30,
    },
    AchievementDefinition {
        id: "complete_all",
        name: "Perfectionist",
        category: AchievementCategory::Milestone,
        tier: AchievementTier::Gold,
        requirement: 1,
    },
];

/// Live counters the achievements are evaluated against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingCounters {
    pub longest_streak: u32,
    pub completed_workouts: u32,
    pub total_workouts: u32,
    pub progress_entries: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub definition: AchievementDefinition,
    pub unlocked: bool,
    pub progress: u32,
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    #[must_use]
    pub fn ratio(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.progress as f32 / self.definition.requirement as f32;
        ratio
    }
}

/// Evaluate all achievement definitions against the given counters.
///
/// `unlocked_at` is set to `now` on every evaluation; the evaluator is
/// stateless, so callers that want stable unlock timestamps have to
/// persist the first one they see.
#[must_use]
pub fn achievements(counters: &TrainingCounters, now: DateTime<Utc>) -> Vec<Achievement> {
    DEFINITIONS
        .iter()
        .map(|definition| {
            let progress = match definition.category {
                AchievementCategory::Streak => counters.longest_streak,
                AchievementCategory::Workout => counters.completed_workouts,
                AchievementCategory::Progress => counters.progress_entries,
                AchievementCategory::Milestone => u32::from(
                    counters.total_workouts > 0
                        && counters.completed_workouts == counters.total_workouts,
                ),
            };
            let unlocked = progress >= definition.requirement;
            Achievement {
                definition: *definition,
                unlocked,
                progress,
                unlocked_at: unlocked.then_some(now),
            }
        })
        .collect()
}

/// The locked achievement closest to being unlocked, `None` if all are
/// unlocked. Ties go to the first one in definition order.
#[must_use]
pub fn next_achievement(achievements: &[Achievement]) -> Option<&Achievement> {
    achievements
        .iter()
        .filter(|a| !a.unlocked)
        .fold(None, |best: Option<&Achievement>, candidate| match best {
            Some(best) if candidate.ratio() <= best.ratio() => Some(best),
            _ => Some(candidate),
        })
}

/// Unlocked achievements whose timestamp falls within the last
/// `window_hours` before `now`.
#[must_use]
pub fn recently_unlocked(
    achievements: &[Achievement],
    window_hours: i64,
    now: DateTime<Utc>,
) -> Vec<&Achievement> {
    achievements
        .iter()
        .filter(|a| {
            a.unlocked_at
                .is_some_and(|t| t <= now && now - t <= Duration::hours(window_hours))
        })
        .collect()
}
