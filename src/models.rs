use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}

impl Mood {
    /// Fixed enumeration order, also the tie-break order for the dominant mood.
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Neutral, Mood::Sad];

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "happy" => Some(Mood::Happy),
            "neutral" => Some(Mood::Neutral),
            "sad" => Some(Mood::Sad),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    High,
    Medium,
    Low,
}

impl Energy {
    pub const ALL: [Energy; 3] = [Energy::High, Energy::Medium, Energy::Low];

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "high" => Some(Energy::High),
            "medium" => Some(Energy::Medium),
            "low" => Some(Energy::Low),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Energy::High => "high",
            Energy::Medium => "medium",
            Energy::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Evening,
    Night,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Evening, TimeSlot::Night];

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "morning" => Some(TimeSlot::Morning),
            "evening" => Some(TimeSlot::Evening),
            "night" => Some(TimeSlot::Night),
            _ => None,
        }
    }
}

// Unrecognized labels arrive as None rather than failing the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    pub date: NaiveDate,
    pub mood: Option<Mood>,
    pub energy: Option<Energy>,
    #[serde(default)]
    pub symptoms: String,
    pub slot: Option<TimeSlot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCounts {
    pub happy: u32,
    pub neutral: u32,
    pub sad: u32,
}

impl MoodCounts {
    pub fn get(&self, mood: Mood) -> u32 {
        match mood {
            Mood::Happy => self.happy,
            Mood::Neutral => self.neutral,
            Mood::Sad => self.sad,
        }
    }

    pub fn increment(&mut self, mood: Mood) {
        match mood {
            Mood::Happy => self.happy += 1,
            Mood::Neutral => self.neutral += 1,
            Mood::Sad => self.sad += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.happy + self.neutral + self.sad
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyCounts {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl EnergyCounts {
    pub fn get(&self, energy: Energy) -> u32 {
        match energy {
            Energy::High => self.high,
            Energy::Medium => self.medium,
            Energy::Low => self.low,
        }
    }

    pub fn increment(&mut self, energy: Energy) {
        match energy {
            Energy::High => self.high += 1,
            Energy::Medium => self.medium += 1,
            Energy::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCounts {
    pub morning: u32,
    pub evening: u32,
    pub night: u32,
}

impl SlotCounts {
    pub fn increment(&mut self, slot: TimeSlot) {
        match slot {
            TimeSlot::Morning => self.morning += 1,
            TimeSlot::Evening => self.evening += 1,
            TimeSlot::Night => self.night += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomCount {
    pub symptom: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekAggregate {
    pub total_checkins: u32,
    pub mood_counts: MoodCounts,
    pub energy_counts: EnergyCounts,
    pub slot_counts: SlotCounts,
    /// Display-cased; compare via `aggregate::normalize_symptom`.
    pub top_symptoms: Vec<SymptomCount>,
    pub dominant_mood: Option<Mood>,
    pub dominant_energy: Option<Energy>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodDelta {
    pub happy: i64,
    pub neutral: i64,
    pub sad: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyDelta {
    pub high: i64,
    pub medium: i64,
    pub low: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDelta {
    pub morning: i64,
    pub evening: i64,
    pub night: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomShift {
    pub symptom: String,
    pub previous: u32,
    pub current: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomChanges {
    pub increased: Vec<SymptomShift>,
    pub decreased: Vec<SymptomShift>,
    pub new: Vec<SymptomCount>,
    pub gone: Vec<SymptomCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendDeltas {
    pub total_checkins: i64,
    pub mood: MoodDelta,
    pub energy: EnergyDelta,
    pub slots: SlotDelta,
    pub symptoms: SymptomChanges,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stable,
}

impl Direction {
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s > 0 => Direction::Up,
            s if s < 0 => Direction::Down,
            _ => Direction::Stable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekTrends {
    pub mood: Direction,
    pub energy: Direction,
    pub symptoms: Direction,
    pub overall_wellbeing: Direction,
    pub mood_score: i64,
    pub energy_score: i64,
    pub symptom_score: i64,
    pub overall_score: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Light,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedSymptom {
    pub symptom: String,
    pub count: u32,
    pub weight: u8,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomAnalysis {
    pub weighted_symptoms: Vec<WeightedSymptom>,
    pub total_score: u32,
    pub average_weight: f64,
    pub has_red_flags: bool,
    pub red_flag_symptoms: Vec<String>,
    pub severity_level: SeverityLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum Stage {
    Pregnancy { trimester: u8 },
    Postpartum { week: u32 },
}

impl Stage {
    pub fn is_postpartum(&self) -> bool {
        matches!(self, Stage::Postpartum { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCategory {
    Nausea,
    Fatigue,
    Headache,
    BackPain,
    Insomnia,
}

/// Doubles as the dedup tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "category")]
pub enum SuggestionKind {
    RedFlag,
    PostpartumMood,
    ToughWeek,
    HeavySymptoms,
    EmotionalSupport,
    Rest,
    Symptom(SymptomCategory),
    Consistency,
    Appointment,
    StageGuidance,
    General,
}

impl SuggestionKind {
    pub fn icon(self) -> &'static str {
        match self {
            SuggestionKind::RedFlag => "alert-circle",
            SuggestionKind::PostpartumMood => "heart-pulse",
            SuggestionKind::ToughWeek => "trending-down",
            SuggestionKind::HeavySymptoms => "thermometer",
            SuggestionKind::EmotionalSupport => "heart",
            SuggestionKind::Rest => "battery-low",
            SuggestionKind::Symptom(SymptomCategory::Nausea) => "coffee",
            SuggestionKind::Symptom(SymptomCategory::Fatigue) => "moon",
            SuggestionKind::Symptom(SymptomCategory::Headache) => "droplet",
            SuggestionKind::Symptom(SymptomCategory::BackPain) => "activity",
            SuggestionKind::Symptom(SymptomCategory::Insomnia) => "bed",
            SuggestionKind::Consistency => "calendar-check",
            SuggestionKind::Appointment => "calendar",
            SuggestionKind::StageGuidance => "baby",
            SuggestionKind::General => "smile",
        }
    }
}

/// Lower `priority` shows first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub icon: String,
    pub text: String,
    pub priority: f64,
    pub kind: SuggestionKind,
}

#[derive(Debug, Clone, Copy)]
pub struct SuggestionContext<'a> {
    pub aggregate: &'a WeekAggregate,
    pub stage: Stage,
    pub appointment_upcoming: bool,
    pub deltas: Option<&'a TrendDeltas>,
    pub days_logged: Option<u32>,
    pub analysis: &'a SymptomAnalysis,
    /// Drives content-pool rotation (weekday, Sunday = 0).
    pub today: NaiveDate,
}
