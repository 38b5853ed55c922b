// Upstream payload shapes that differ from the domain records

use serde::Deserialize;

use backend_domain::{BrawlerAbility, Brawler, DataSource, EventRotation, ScheduledEvent};

/// `/brawlers` wraps the roster; community mirrors use `list` instead of `items`.
#[derive(Debug, Deserialize)]
pub struct BrawlersEnvelope {
    #[serde(default, alias = "list")]
    items: Vec<WireBrawler>,
}

impl BrawlersEnvelope {
    pub fn into_brawlers(self) -> Vec<Brawler> {
        self.items.into_iter().map(WireBrawler::into_brawler).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBrawler {
    id: i64,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "imageUrl2")]
    image_url: Option<String>,
    #[serde(default)]
    rarity: Option<NamedField>,
    #[serde(default)]
    class: Option<NamedField>,
    #[serde(default)]
    star_powers: Vec<BrawlerAbility>,
    #[serde(default)]
    gadgets: Vec<BrawlerAbility>,
}

/// Either `"Epic"` or `{"id": 6, "name": "Epic"}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NamedField {
    Plain(String),
    Named { name: String },
}

impl NamedField {
    fn into_name(self) -> String {
        match self {
            NamedField::Plain(name) | NamedField::Named { name } => name,
        }
    }
}

impl WireBrawler {
    fn into_brawler(self) -> Brawler {
        Brawler {
            id: self.id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            rarity: self.rarity.map(NamedField::into_name),
            class: self.class.map(NamedField::into_name),
            star_powers: self.star_powers,
            gadgets: self.gadgets,
        }
    }
}

/// One entry of `/events/rotation`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationSlot {
    start_time: String,
    end_time: String,
    #[serde(default)]
    slot_id: Option<i64>,
    event: RotationEvent,
}

#[derive(Debug, Deserialize)]
struct RotationEvent {
    id: i64,
    #[serde(default)]
    mode: String,
    #[serde(default)]
    map: String,
}

pub fn into_rotation(slots: Vec<RotationSlot>) -> EventRotation {
    let schedule = slots
        .into_iter()
        .map(|slot| ScheduledEvent {
            id: slot.event.id,
            mode: slot.event.mode,
            map: slot.event.map,
            start_time: slot.start_time,
            end_time: slot.end_time,
            slot_id: slot.slot_id,
            top_brawlers: Vec::new(),
        })
        .collect();
    EventRotation {
        schedule,
        data_source: DataSource::Live,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roster_accepts_both_envelopes_and_named_fields() {
        let official: BrawlersEnvelope = serde_json::from_value(json!({
            "items": [{
                "id": 16000000,
                "name": "SHELLY",
                "starPowers": [{"id": 23000076, "name": "SHELL SHOCK"}],
                "gadgets": [{"id": 23000255, "name": "FAST FORWARD"}]
            }]
        }))
        .expect("official payload");
        let roster = official.into_brawlers();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].star_powers[0].name, "SHELL SHOCK");
        assert_eq!(roster[0].rarity, None);

        let mirror: BrawlersEnvelope = serde_json::from_value(json!({
            "list": [{
                "id": 16000001,
                "name": "Colt",
                "imageUrl2": "https://cdn.example.com/colt.png",
                "rarity": {"id": 2, "name": "Rare"},
                "class": "Damage Dealer"
            }]
        }))
        .expect("mirror payload");
        let roster = mirror.into_brawlers();
        assert_eq!(roster[0].rarity.as_deref(), Some("Rare"));
        assert_eq!(roster[0].class.as_deref(), Some("Damage Dealer"));
        assert_eq!(
            roster[0].image_url.as_deref(),
            Some("https://cdn.example.com/colt.png")
        );
    }

    #[test]
    fn rotation_slots_flatten_into_schedule() {
        let slots: Vec<RotationSlot> = serde_json::from_value(json!([{
            "startTime": "20240101T080000.000Z",
            "endTime": "20240102T080000.000Z",
            "slotId": 1,
            "event": {"id": 15000010, "mode": "gemGrab", "map": "Acid Lakes"}
        }]))
        .expect("rotation payload");
        let rotation = into_rotation(slots);
        assert_eq!(rotation.data_source, DataSource::Live);
        assert_eq!(rotation.schedule[0].map, "Acid Lakes");
        assert_eq!(rotation.schedule[0].slot_id, Some(1));
        assert!(rotation.schedule[0].top_brawlers.is_empty());
    }
}
