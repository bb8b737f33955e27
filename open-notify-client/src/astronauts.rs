//! Astronaut roster endpoint (`astros.json`).

use serde_derive::Deserialize;

use crate::error::Error;

pub(crate) const PATH: &str = "astros.json";

/// One crew member currently in space.
#[derive(Deserialize, Debug, Clone)]
pub struct Astronaut {
    pub name: String,
    pub craft: String,
}

#[derive(Deserialize, Debug)]
struct Roster {
    people: Vec<Astronaut>,
}

/// Extracts the crew list from a roster response body. The response order is
/// kept as-is; it carries no meaning but callers display it unchanged.
pub(crate) fn parse_astronauts(body: &str) -> Result<Vec<Astronaut>, Error> {
    let roster: Roster = serde_json::from_str(body)
        .map_err(|e| Error::format(format!("astronaut roster: {e}")))?;
    Ok(roster.people)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = r#"{
        "message": "success",
        "number": 3,
        "people": [
            {"name": "Jasmin Moghbeli", "craft": "ISS"},
            {"name": "Andreas Mogensen", "craft": "ISS"},
            {"name": "Oleg Kononenko", "craft": "Soyuz MS-24"}
        ]
    }"#;

    #[test]
    fn roster_order_preserved() {
        let people = parse_astronauts(ROSTER).unwrap();
        assert_eq!(people.len(), 3);
        assert_eq!(people[0].name, "Jasmin Moghbeli");
        assert_eq!(people[0].craft, "ISS");
        assert_eq!(people[1].name, "Andreas Mogensen");
        assert_eq!(people[2].name, "Oleg Kononenko");
        assert_eq!(people[2].craft, "Soyuz MS-24");
    }

    #[test]
    fn empty_roster_is_valid() {
        let people = parse_astronauts(r#"{"people": []}"#).unwrap();
        assert!(people.is_empty());
    }

    #[test]
    fn missing_craft_is_a_format_error() {
        let body = r#"{"people": [{"name": "Jasmin Moghbeli"}]}"#;
        match parse_astronauts(body) {
            Err(Error::Format { message }) => assert!(message.contains("craft")),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn missing_people_list_is_a_format_error() {
        assert!(matches!(
            parse_astronauts(r#"{"message": "success"}"#),
            Err(Error::Format { .. })
        ));
    }
}
