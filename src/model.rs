use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of options every question carries (labels A-D).
pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Topic {
    #[serde(rename = "Wired vs Wireless")]
    WiredVsWireless,
    #[serde(rename = "Wireless Applications")]
    WirelessApplications,
    #[serde(rename = "Bandwidth & Frequency")]
    BandwidthFrequency,
    #[serde(rename = "Modulation Basics")]
    ModulationBasics,
    #[serde(rename = "Amplitude Modulation (AM)")]
    AmplitudeModulation,
    #[serde(rename = "Frequency Modulation (FM)")]
    FrequencyModulation,
    #[serde(rename = "Phase Modulation (PM)")]
    PhaseModulation,
    #[serde(rename = "Digital Modulation")]
    DigitalModulation,
    #[serde(rename = "PSK")]
    Psk,
    #[serde(rename = "QAM")]
    Qam,
    #[serde(rename = "OFDM/OFDMA & SC-FDMA")]
    OfdmOfdmaScFdma,
    #[serde(rename = "RB/Frame Structure")]
    RbFrameStructure,
    #[serde(rename = "LTE Architecture & EPC")]
    LteArchitectureEpc,
    #[serde(rename = "Interfaces")]
    Interfaces,
    #[serde(rename = "Bearers")]
    Bearers,
    #[serde(rename = "Initial Attach")]
    InitialAttach,
    #[serde(rename = "Protocol Stack")]
    ProtocolStack,
    #[serde(rename = "eNodeB & MAC")]
    EnodebMac,
    #[serde(rename = "Scheduling/HARQ/LCP")]
    SchedulingHarqLcp,
    #[serde(rename = "MIMO & CSI")]
    MimoCsi,
    #[serde(rename = "QoS/QCI")]
    QosQci,
    #[serde(rename = "3G→4G/5G Evolution")]
    Evolution3g4g5g,
    #[serde(rename = "3GPP Releases")]
    Releases3gpp,
    #[serde(rename = "OFDMA vs TDMA/CDMA")]
    OfdmaVsTdmaCdma,
    #[serde(rename = "5G URLLC")]
    Urllc5g,
    #[serde(rename = "5G Security")]
    Security5g,
}

impl Topic {
    /// All topics in curriculum order (the order the topic selector lists them).
    pub const ALL: [Topic; 26] = [
        Topic::WiredVsWireless,
        Topic::WirelessApplications,
        Topic::BandwidthFrequency,
        Topic::ModulationBasics,
        Topic::AmplitudeModulation,
        Topic::FrequencyModulation,
        Topic::PhaseModulation,
        Topic::DigitalModulation,
        Topic::Psk,
        Topic::Qam,
        Topic::OfdmOfdmaScFdma,
        Topic::RbFrameStructure,
        Topic::LteArchitectureEpc,
        Topic::Interfaces,
        Topic::Bearers,
        Topic::InitialAttach,
        Topic::ProtocolStack,
        Topic::EnodebMac,
        Topic::SchedulingHarqLcp,
        Topic::MimoCsi,
        Topic::QosQci,
        Topic::Evolution3g4g5g,
        Topic::Releases3gpp,
        Topic::OfdmaVsTdmaCdma,
        Topic::Urllc5g,
        Topic::Security5g,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Topic::WiredVsWireless => "Wired vs Wireless",
            Topic::WirelessApplications => "Wireless Applications",
            Topic::BandwidthFrequency => "Bandwidth & Frequency",
            Topic::ModulationBasics => "Modulation Basics",
            Topic::AmplitudeModulation => "Amplitude Modulation (AM)",
            Topic::FrequencyModulation => "Frequency Modulation (FM)",
            Topic::PhaseModulation => "Phase Modulation (PM)",
            Topic::DigitalModulation => "Digital Modulation",
            Topic::Psk => "PSK",
            Topic::Qam => "QAM",
            Topic::OfdmOfdmaScFdma => "OFDM/OFDMA & SC-FDMA",
            Topic::RbFrameStructure => "RB/Frame Structure",
            Topic::LteArchitectureEpc => "LTE Architecture & EPC",
            Topic::Interfaces => "Interfaces",
            Topic::Bearers => "Bearers",
            Topic::InitialAttach => "Initial Attach",
            Topic::ProtocolStack => "Protocol Stack",
            Topic::EnodebMac => "eNodeB & MAC",
            Topic::SchedulingHarqLcp => "Scheduling/HARQ/LCP",
            Topic::MimoCsi => "MIMO & CSI",
            Topic::QosQci => "QoS/QCI",
            Topic::Evolution3g4g5g => "3G→4G/5G Evolution",
            Topic::Releases3gpp => "3GPP Releases",
            Topic::OfdmaVsTdmaCdma => "OFDMA vs TDMA/CDMA",
            Topic::Urllc5g => "5G URLLC",
            Topic::Security5g => "5G Security",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog entry. Field names on the wire follow the exported bank
/// (`q` for the prompt, `answer` for the correct option index).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub lecture: String,
    #[serde(rename = "q")]
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    #[serde(rename = "answer")]
    pub correct_index: u8,
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, choice: u8) -> bool {
        self.correct_index == choice
    }

    /// "A".."D" for option positions 0..3.
    pub fn option_label(index: usize) -> char {
        (b'A' + index as u8) as char
    }
}

/// Selector value for a filter: either everything or a single value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All"),
            Filter::Only(value) => write!(f, "{value}"),
        }
    }
}

pub type TopicFilter = Filter<Topic>;
pub type DifficultyFilter = Filter<Difficulty>;

/// Feedback policy for a run: practice reveals per question, exam reveals at the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackMode {
    Instant,
    Deferred,
}

impl FeedbackMode {
    pub fn from_exam_mode(exam_mode: bool) -> Self {
        if exam_mode {
            FeedbackMode::Deferred
        } else {
            FeedbackMode::Instant
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedbackMode::Instant => "Practice",
            FeedbackMode::Deferred => "Exam",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    Running,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Outcome of a guarded transition. Failed preconditions are not errors,
/// the intent is simply dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        matches!(self, Transition::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_labels_match_serde_names() {
        for topic in Topic::ALL {
            let yaml = serde_yaml::to_string(&topic).expect("serialize topic");
            let back: Topic = serde_yaml::from_str(&yaml).expect("parse topic");
            assert_eq!(back, topic);
            let json = serde_json::to_string(&topic).expect("serialize topic");
            assert_eq!(json, format!("\"{}\"", topic.label()));
        }
    }

    #[test]
    fn filter_all_matches_everything() {
        let all: TopicFilter = Filter::All;
        assert!(all.matches(&Topic::Qam));
        let only = Filter::Only(Difficulty::Hard);
        assert!(only.matches(&Difficulty::Hard));
        assert!(!only.matches(&Difficulty::Easy));
        assert_eq!(only.to_string(), "hard");
        assert_eq!(all.to_string(), "All");
    }

    #[test]
    fn option_labels_run_a_to_d() {
        let labels: String = (0..OPTION_COUNT).map(Question::option_label).collect();
        assert_eq!(labels, "ABCD");
    }
}
