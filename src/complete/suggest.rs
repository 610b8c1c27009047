use serde::{Serialize, Serializer};

use crate::complete::parser::CandidateRecord;

/// What kind of entity a generator completes. Decides the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Config,
    Project,
    Environment,
    Flag,
}

const LD_BLUE: &str = "405BFF";
const LD_CYAN: &str = "3DD6F5";
const LD_PURPLE: &str = "A34FDE";

impl EntityKind {
    /// Fixed per-kind badge. Configs get none; they only ever appear in a
    /// list of their own kind.
    pub fn badge(self) -> Option<Badge> {
        match self {
            EntityKind::Config => None,
            EntityKind::Project => Some(Badge { color: LD_BLUE, glyph: 'P' }),
            EntityKind::Environment => Some(Badge { color: LD_CYAN, glyph: 'E' }),
            EntityKind::Flag => Some(Badge { color: LD_PURPLE, glyph: 'F' }),
        }
    }
}

/// Fixed color and one-character glyph shown next to a suggestion, so a
/// user scanning a mixed list can tell kinds apart at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub color: &'static str,
    pub glyph: char,
}

impl Badge {
    /// Icon URI in the shape the shell integration understands.
    pub fn icon(&self) -> String {
        format!("fig://template?color={}&badge={}", self.color, self.glyph)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(self.color.get(range).unwrap_or("0"), 16).unwrap_or(0)
        };
        (channel(0..2), channel(2..4), channel(4..6))
    }
}

/// The unit handed to the host: what to display, what to insert, and how
/// to describe it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub name: String,
    pub insert_value: String,
    pub description: String,
    #[serde(
        rename = "icon",
        skip_serializing_if = "Option::is_none",
        serialize_with = "badge_icon"
    )]
    pub badge: Option<Badge>,
}

fn badge_icon<S: Serializer>(badge: &Option<Badge>, serializer: S) -> Result<S::Ok, S::Error> {
    match badge {
        Some(badge) => serializer.serialize_str(&badge.icon()),
        None => serializer.serialize_none(),
    }
}

impl Suggestion {
    /// The record's key is both the displayed name and the inserted value;
    /// the value must reappear on the command line exactly as the
    /// underlying CLI expects it.
    pub fn from_record(record: CandidateRecord, kind: EntityKind) -> Self {
        Self {
            name: record.key.clone(),
            insert_value: record.key,
            description: record.name,
            badge: kind.badge(),
        }
    }

    /// A plain suggestion with no badge, for static grammar entries.
    pub fn plain(value: impl Into<String>, description: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: value.clone(),
            insert_value: value,
            description: description.into(),
            badge: None,
        }
    }
}

/// Map records to suggestions, order preserved. Duplicate keys pass through
/// unchanged; whatever the source output says, the host shows.
pub fn build(records: Vec<CandidateRecord>, kind: EntityKind) -> Vec<Suggestion> {
    records
        .into_iter()
        .map(|record| Suggestion::from_record(record, kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, name: &str) -> CandidateRecord {
        CandidateRecord {
            key: key.to_string(),
            name: name.to_string(),
            detail: None,
        }
    }

    #[test]
    fn test_key_round_trips_into_name_and_insert_value() {
        let suggestions = build(vec![record("prod-env", "Production")], EntityKind::Environment);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "prod-env");
        assert_eq!(suggestions[0].insert_value, "prod-env");
        assert_eq!(suggestions[0].description, "Production");
    }

    #[test]
    fn test_badges_distinguish_kinds() {
        let project = EntityKind::Project.badge().unwrap();
        let environment = EntityKind::Environment.badge().unwrap();
        let flag = EntityKind::Flag.badge().unwrap();

        assert_eq!(project.glyph, 'P');
        assert_eq!(environment.glyph, 'E');
        assert_eq!(flag.glyph, 'F');
        assert_ne!(project.color, environment.color);
        assert_ne!(environment.color, flag.color);
    }

    #[test]
    fn test_config_suggestions_carry_no_badge() {
        assert_eq!(EntityKind::Config.badge(), None);
    }

    #[test]
    fn test_icon_uri() {
        let badge = EntityKind::Project.badge().unwrap();
        assert_eq!(badge.icon(), "fig://template?color=405BFF&badge=P");
    }

    #[test]
    fn test_badge_rgb() {
        let badge = EntityKind::Project.badge().unwrap();
        assert_eq!(badge.rgb(), (0x40, 0x5b, 0xff));
    }

    #[test]
    fn test_duplicates_pass_through() {
        let records = vec![record("dup", "First"), record("dup", "Second")];
        let suggestions = build(records, EntityKind::Flag);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].description, "First");
        assert_eq!(suggestions[1].description, "Second");
    }

    #[test]
    fn test_json_shape() {
        let suggestions = build(vec![record("my-key", "Human Readable Name")], EntityKind::Project);
        let json = serde_json::to_string(&suggestions[0]).unwrap();
        assert_eq!(
            json,
            r#"{"name":"my-key","insertValue":"my-key","description":"Human Readable Name","icon":"fig://template?color=405BFF&badge=P"}"#
        );
    }

    #[test]
    fn test_empty_records_build_empty_list() {
        assert!(build(Vec::new(), EntityKind::Project).is_empty());
    }
}
