//! Ranked supportive suggestions for the partner view.
//!
//! Rules run in a fixed order and fire independently. Everything that fires
//! is collected, sorted by ascending priority (stable, so the earlier rule
//! wins a tie) and cut to the configured cap.
//!
//! Text comes from small pools rotated by weekday. Everyone sees the same
//! variant on the same weekday; no per-user state is kept.

use chrono::{Datelike, NaiveDate};

use crate::aggregate::normalize_symptom;
use crate::config::EngineConfig;
use crate::models::{
    Energy, Mood, SeverityLevel, Stage, Suggestion, SuggestionContext, SuggestionKind,
    SymptomCategory,
};
use crate::trends::{energy_worsened, mood_worsened};

const RED_FLAG: &[&str] = &[
    "They logged {symptoms} this week. Encourage a call to their provider today rather than waiting for the next visit.",
    "This week's check-ins mention {symptoms}. Offer to help make the call to their care team.",
    "Some of this week's symptoms ({symptoms}) are worth a provider's opinion. Suggest reaching out and offer to sit with them while they do.",
];

const POSTPARTUM_MOOD: &[&str] = &[
    "Several low-mood check-ins this week. Gently ask how they are really doing, and mention that postpartum mood changes are common and treatable.",
    "It has been a heavy week emotionally. Consider asking whether a check-in with their provider about postpartum mood would help.",
];

const TOUGH_WEEK: &[&str] = &[
    "This week looks tougher than last. A little extra patience and help around the house can go a long way.",
    "Things dipped compared to last week. Ask what would make the next few days easier and take one task off their plate.",
    "Mood or energy slipped since last week. Plan something low-key and restful together.",
];

const HEAVY_SYMPTOMS: &[&str] = &[
    "Symptoms have been heavy this week. Take over a chore or two so they can rest.",
    "A lot of discomfort logged this week. Ask which symptom bothers them most and help tackle that one.",
];

const EMOTIONAL_SUPPORT: &[&str] = &[
    "Mood has been mostly low. Make time to listen without trying to fix anything.",
    "It has been an emotional week. A short walk or a quiet evening together can help.",
    "Low mood came up most this week. A kind note or small surprise can lift the day.",
];

const REST: &[&str] = &[
    "Energy has been low. Protect time for naps and early nights.",
    "Running on empty this week. Handle dinner a few nights so they can put their feet up.",
    "Low energy dominated the week. Keep plans light and let rest come first.",
];

const NAUSEA: &[&str] = &[
    "Nausea has been around. Keep crackers, ginger tea or cold water within reach.",
    "For nausea, small frequent snacks often help more than big meals. Offer to keep some handy.",
];

const FATIGUE: &[&str] = &[
    "Fatigue keeps coming up. Encourage short rests during the day and take on the evening tasks.",
    "Tiredness is common right now. Offer to handle errands so they can recharge.",
];

const HEADACHE: &[&str] = &[
    "Headaches were logged. Remind them to stay hydrated and dim the lights when one comes on.",
    "For headaches, water, a snack and a quiet room can help. Check with the provider before any medication.",
];

const BACK_PAIN: &[&str] = &[
    "Back pain showed up this week. A gentle back rub or a warm (not hot) compress can bring relief.",
    "Help with lifting and bending this week, and consider a supportive pillow for sleep.",
];

const INSOMNIA: &[&str] = &[
    "Sleep has been rough. A calm wind-down routine and a cool, dark room can help.",
    "Trouble sleeping came up. Take the early shift some mornings so they can catch up on rest.",
];

const CONSISTENCY: &[&str] = &[
    "Only a couple of check-ins this week. A gentle reminder to log how they feel helps you support them better.",
    "Check-ins were sparse this week. No pressure, but a quick daily note makes trends easier to spot.",
];

const APPOINTMENT: &[&str] = &[
    "There is an appointment coming up. Offer to go along and jot down questions together beforehand.",
    "An appointment is on the calendar. Ask whether they would like company or help with transport.",
];

const FIRST_TRIMESTER: &[&str] = &[
    "The first trimester can be exhausting. Extra rest and simple meals make a big difference.",
    "Early pregnancy brings a lot of change. Ask how they are feeling about it all.",
];

const SECOND_TRIMESTER: &[&str] = &[
    "The second trimester is often a good time to plan a short outing or start preparing the nursery together.",
    "Energy often returns in the second trimester. Suggest a gentle walk or a prenatal class together.",
];

const THIRD_TRIMESTER: &[&str] = &[
    "The third trimester can be uncomfortable. Help with anything that involves bending or lifting.",
    "The big day is getting closer. Go over the hospital bag and birth plan together.",
];

const POSTPARTUM_EARLY: &[&str] = &[
    "The first weeks after birth are about recovery. Take over night feeds or chores where you can.",
    "Early postpartum recovery takes time. Keep visitors short and meals easy.",
];

const POSTPARTUM_MID: &[&str] = &[
    "A couple of months in, routines are forming. Make sure they get some time just for themselves.",
    "As things settle, check in about sleep and how recovery is going.",
];

const POSTPARTUM_LATE: &[&str] = &[
    "Several months in, keep sharing the load and celebrate the small wins together.",
    "Plan a little time together as a couple; it helps you both recharge.",
];

const GENERAL: &[&str] = &[
    "A simple \"how are you feeling today?\" means more than you might think.",
    "Small gestures add up. A cup of tea or a foot rub can brighten the day.",
    "Keep showing up. Your steady support matters every week.",
];

struct Category {
    category: SymptomCategory,
    keywords: &'static [&'static str],
    pool: &'static [&'static str],
}

const SYMPTOM_CATEGORIES: &[Category] = &[
    Category {
        category: SymptomCategory::Nausea,
        keywords: &["nausea", "morning sickness", "vomit", "queasy"],
        pool: NAUSEA,
    },
    Category {
        category: SymptomCategory::Fatigue,
        keywords: &["fatigue", "tired", "exhaust"],
        pool: FATIGUE,
    },
    Category {
        category: SymptomCategory::Headache,
        keywords: &["headache", "migraine"],
        pool: HEADACHE,
    },
    Category {
        category: SymptomCategory::BackPain,
        keywords: &["back pain", "backache", "back ache", "sciatica"],
        pool: BACK_PAIN,
    },
    Category {
        category: SymptomCategory::Insomnia,
        keywords: &["insomnia", "can't sleep", "trouble sleeping", "sleepless"],
        pool: INSOMNIA,
    },
];

/// Sunday = 0, matching the usual calendar-widget convention.
pub fn day_of_week(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// `pool[day % len]`; empty pools yield an empty string.
pub fn pick(pool: &[&'static str], day: usize) -> &'static str {
    if pool.is_empty() {
        return "";
    }
    pool[day % pool.len()]
}

fn stage_pool(stage: Stage) -> &'static [&'static str] {
    match stage {
        Stage::Pregnancy { trimester } if trimester <= 1 => FIRST_TRIMESTER,
        Stage::Pregnancy { trimester: 2 } => SECOND_TRIMESTER,
        Stage::Pregnancy { .. } => THIRD_TRIMESTER,
        Stage::Postpartum { week } if week <= 6 => POSTPARTUM_EARLY,
        Stage::Postpartum { week } if week <= 12 => POSTPARTUM_MID,
        Stage::Postpartum { .. } => POSTPARTUM_LATE,
    }
}

struct Collector {
    day: usize,
    fired: Vec<Suggestion>,
}

impl Collector {
    fn push(&mut self, kind: SuggestionKind, priority: f64, text: String) {
        if self.fired.iter().any(|s| s.kind == kind) {
            return;
        }
        tracing::debug!(?kind, priority, "suggestion rule fired");
        self.fired.push(Suggestion {
            icon: kind.icon().to_string(),
            text,
            priority,
            kind,
        });
    }

    fn push_from(&mut self, kind: SuggestionKind, priority: f64, pool: &[&'static str]) {
        let text = pick(pool, self.day).to_string();
        self.push(kind, priority, text);
    }

    fn len(&self) -> usize {
        self.fired.len()
    }
}

pub fn generate(context: &SuggestionContext<'_>) -> Vec<Suggestion> {
    generate_with(context, &EngineConfig::default())
}

pub fn generate_with(context: &SuggestionContext<'_>, config: &EngineConfig) -> Vec<Suggestion> {
    let week = context.aggregate;
    let analysis = context.analysis;
    let mut out = Collector {
        day: day_of_week(context.today),
        fired: Vec::new(),
    };

    if analysis.has_red_flags {
        let symptoms = analysis.red_flag_symptoms.join(", ").to_lowercase();
        let text = pick(RED_FLAG, out.day).replace("{symptoms}", &symptoms);
        out.push(SuggestionKind::RedFlag, 0.0, text);
    }

    if context.stage.is_postpartum()
        && week.mood_counts.get(Mood::Sad) >= config.postpartum_sad_threshold
    {
        out.push_from(SuggestionKind::PostpartumMood, 0.5, POSTPARTUM_MOOD);
    }

    if let Some(deltas) = context.deltas {
        if mood_worsened(deltas) || energy_worsened(deltas) {
            out.push_from(SuggestionKind::ToughWeek, 1.0, TOUGH_WEEK);
        }
    }

    if analysis.severity_level == SeverityLevel::Heavy {
        out.push_from(SuggestionKind::HeavySymptoms, 1.5, HEAVY_SYMPTOMS);
    }

    if week.dominant_mood == Some(Mood::Sad) {
        out.push_from(SuggestionKind::EmotionalSupport, 2.0, EMOTIONAL_SUPPORT);
    }

    if week.dominant_energy == Some(Energy::Low) {
        out.push_from(SuggestionKind::Rest, 3.0, REST);
    }

    for weighted in &analysis.weighted_symptoms {
        let text = normalize_symptom(&weighted.symptom);
        for category in SYMPTOM_CATEGORIES {
            if category.keywords.iter().any(|kw| text.contains(kw)) {
                out.push_from(
                    SuggestionKind::Symptom(category.category),
                    config.symptom_priority(weighted.weight),
                    category.pool,
                );
            }
        }
    }

    if let Some(days) = context.days_logged {
        if days <= config.low_logging_days && week.total_checkins > 0 {
            out.push_from(SuggestionKind::Consistency, 6.0, CONSISTENCY);
        }
    }

    if context.appointment_upcoming {
        out.push_from(SuggestionKind::Appointment, 7.0, APPOINTMENT);
    }

    if out.len() < config.fallback_min_suggestions {
        out.push_from(SuggestionKind::StageGuidance, 8.0, stage_pool(context.stage));
    }

    if out.len() < config.fallback_min_suggestions {
        out.push_from(SuggestionKind::General, 9.0, GENERAL);
    }

    let mut fired = out.fired;
    fired.sort_by(|a, b| a.priority.total_cmp(&b.priority));
    fired.truncate(config.max_suggestions);
    fired
}
