//! VtStats catalog and stream record types.
//!
//! These model the JSON returned by the `/api/v4/catalog` and
//! `/api/v4/streams/ended` endpoints. Every field carries a serde default so
//! that sparse records (missing timestamps, unowned channels) still decode.

use serde::{Deserialize, Deserializer};

/// Relational snapshot of performers, channels, and groups.
///
/// Treated as immutable for the lifetime of one lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "vtubers")]
    pub performers: Vec<Performer>,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performer {
    #[serde(default, rename = "vtuberId")]
    pub id: String,
    #[serde(default)]
    pub native_name: String,
    #[serde(default)]
    pub english_name: String,
    #[serde(default)]
    pub japanese_name: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub twitter_username: String,
    /// Unix epoch milliseconds.
    #[serde(default, rename = "debuttedAt")]
    pub debuted_at: i64,
    /// `0` while the performer is active.
    #[serde(default)]
    pub retired_at: i64,
}

impl Performer {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.retired_at == 0
    }
}

/// A platform channel, optionally owned by a performer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(default, rename = "channelId", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub platform_id: String,
    #[serde(default)]
    pub platform: String,
    /// Owning performer. An empty string on the wire is normalised to `None`.
    #[serde(default, rename = "vtuberId", deserialize_with = "deserialize_owner")]
    pub owner_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, rename = "groupId")]
    pub id: String,
    #[serde(default, rename = "root")]
    pub is_root: bool,
    #[serde(default)]
    pub native_name: String,
    #[serde(default)]
    pub english_name: String,
    #[serde(default)]
    pub japanese_name: String,
    #[serde(default)]
    pub children: Vec<GroupChild>,
}

impl Group {
    /// Returns `true` if `performer_id` is listed directly among the children.
    ///
    /// Nested groups are not followed.
    #[must_use]
    pub fn lists_performer(&self, performer_id: &str) -> bool {
        self.children
            .iter()
            .any(|child| matches!(child, GroupChild::Performer(id) if id == performer_id))
    }
}

/// A tagged reference from a group to one of its members.
///
/// On the wire this is a `"<kind>:<id>"` string such as `"vtuber:abc"` or
/// `"group:hololive-en"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum GroupChild {
    Performer(String),
    Group(String),
    /// Unrecognised kind or a string with no `:` separator. Never matches.
    Unknown(String),
}

impl GroupChild {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some(("vtuber" | "performer", id)) => Self::Performer(id.to_owned()),
            Some(("group", id)) => Self::Group(id.to_owned()),
            _ => Self::Unknown(raw.to_owned()),
        }
    }
}

impl From<String> for GroupChild {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

/// One completed stream as returned by `/api/v4/streams/ended`.
///
/// Only `viewer_avg` feeds the viewer metrics; the rest is carried as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamRecord {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub platform_id: String,
    #[serde(default)]
    pub stream_id: String,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub channel_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub schedule_time: i64,
    #[serde(default)]
    pub start_time: i64,
    #[serde(default)]
    pub end_time: i64,
    #[serde(default)]
    pub viewer_avg: i64,
    #[serde(default)]
    pub viewer_max: i64,
    #[serde(default)]
    pub like_max: i64,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default)]
    pub status: String,
}

/// Channel ids are sometimes emitted as JSON numbers and sometimes as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(serde_json::Number),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(s) => s,
            WireId::Number(n) => n.to_string(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    WireId::deserialize(deserializer).map(String::from)
}

fn deserialize_owner<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let owner = Option::<String>::deserialize(deserializer)?;
    Ok(owner.filter(|id| !id.is_empty()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn catalog_decodes_wire_names() {
        let body = json!({
            "vtubers": [{
                "vtuberId": "foo",
                "nativeName": "フー",
                "englishName": "Foo",
                "japaneseName": "ふー",
                "thumbnailUrl": "https://example.com/foo.png",
                "twitterUsername": "foo_vt",
                "debuttedAt": 1_600_000_000_000_i64,
                "retiredAt": 0
            }],
            "channels": [
                { "channelId": 7, "platformId": "UCfoo", "platform": "youtube", "vtuberId": "foo" },
                { "channelId": "8", "platformId": "foo_tw", "platform": "twitch" }
            ],
            "groups": [{
                "groupId": "G1",
                "root": true,
                "nativeName": "Bar Group",
                "englishName": "",
                "japaneseName": "",
                "children": ["vtuber:foo", "group:G2", "oddball"]
            }]
        });

        let catalog: Catalog = serde_json::from_value(body).expect("catalog should decode");

        assert_eq!(catalog.performers[0].id, "foo");
        assert_eq!(catalog.performers[0].english_name, "Foo");
        assert!(catalog.performers[0].is_active());
        assert_eq!(catalog.channels[0].id, "7");
        assert_eq!(catalog.channels[0].owner_id.as_deref(), Some("foo"));
        assert_eq!(catalog.channels[1].id, "8");
        assert_eq!(catalog.channels[1].owner_id, None);
        assert!(catalog.groups[0].is_root);
        assert_eq!(
            catalog.groups[0].children,
            vec![
                GroupChild::Performer("foo".to_string()),
                GroupChild::Group("G2".to_string()),
                GroupChild::Unknown("oddball".to_string()),
            ]
        );
    }

    #[test]
    fn empty_owner_is_unowned() {
        let channel: Channel =
            serde_json::from_value(json!({ "channelId": "1", "vtuberId": "" })).unwrap();
        assert_eq!(channel.owner_id, None);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let catalog: Catalog = serde_json::from_value(json!({})).unwrap();
        assert!(catalog.performers.is_empty());
        assert!(catalog.channels.is_empty());
        assert!(catalog.groups.is_empty());
    }

    #[test]
    fn retired_performer_is_not_active() {
        let performer = Performer {
            retired_at: 1_700_000_000_000,
            ..Performer::default()
        };
        assert!(!performer.is_active());
    }

    #[test]
    fn group_child_accepts_both_performer_tags() {
        assert_eq!(
            GroupChild::parse("performer:abc"),
            GroupChild::Performer("abc".to_string())
        );
        assert_eq!(
            GroupChild::parse("vtuber:abc"),
            GroupChild::Performer("abc".to_string())
        );
    }

    #[test]
    fn group_child_keeps_colons_in_id() {
        assert_eq!(
            GroupChild::parse("group:a:b"),
            GroupChild::Group("a:b".to_string())
        );
    }

    #[test]
    fn lists_performer_ignores_nested_groups() {
        let group = Group {
            id: "G1".to_string(),
            children: vec![GroupChild::Group("foo".to_string())],
            ..Group::default()
        };
        assert!(!group.lists_performer("foo"));
    }

    #[test]
    fn stream_record_tolerates_sparse_fields() {
        let record: StreamRecord =
            serde_json::from_value(json!({ "channelId": 12, "viewerAvg": 340 })).unwrap();
        assert_eq!(record.channel_id, "12");
        assert_eq!(record.viewer_avg, 340);
        assert_eq!(record.viewer_max, 0);
        assert!(record.title.is_empty());
    }
}
