//! Shareable `?state=` links
//!
//! Only fields that differ from the mount defaults are written, as a JSON
//! object of strings encoded with URL-safe base64. The query string stays
//! opaque and the default state needs no parameter at all.

use std::collections::BTreeMap;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::StateError;
use crate::layout::{ExplainerState, Gap, ItemCount, LayoutConfig};

const DIRECTION: &str = "direction";
const JUSTIFY: &str = "justify";
const ALIGN_ITEMS: &str = "align_items";
const WRAP: &str = "wrap";
const ALIGN_CONTENT: &str = "align_content";
const GAP: &str = "gap";
const ITEMS: &str = "items";

/// Decode a state string into key-value pairs
pub fn parse_state(encoded: &str) -> Result<BTreeMap<String, String>, StateError> {
    if encoded.is_empty() {
        return Ok(BTreeMap::new());
    }
    let json_bytes = URL_SAFE_NO_PAD.decode(encoded)?;
    Ok(serde_json::from_slice(&json_bytes)?)
}

/// Encode key-value pairs into a state string
pub fn build_state(pairs: &BTreeMap<&str, String>) -> Result<String, StateError> {
    let json = serde_json::to_string(pairs)?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// Collects the fields that differ from their defaults
#[derive(Default)]
struct StateBuilder {
    pairs: BTreeMap<&'static str, String>,
}

impl StateBuilder {
    fn set<T: PartialEq + ToString>(&mut self, key: &'static str, value: T, default: T) {
        if value != default {
            self.pairs.insert(key, value.to_string());
        }
    }
}

fn parse_value<T, E>(
    key: &str,
    value: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<T, StateError> {
    parse(value).map_err(|_| StateError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

impl ExplainerState {
    /// The `?state=` value for this state, `None` when everything is default
    pub fn share_state(&self) -> Result<Option<String>, StateError> {
        let default = LayoutConfig::default();
        let layout = &self.layout;

        let mut builder = StateBuilder::default();
        builder.set(DIRECTION, layout.direction, default.direction);
        builder.set(JUSTIFY, layout.justify, default.justify);
        builder.set(ALIGN_ITEMS, layout.align_items, default.align_items);
        builder.set(WRAP, layout.wrap, default.wrap);
        builder.set(ALIGN_CONTENT, layout.align_content, default.align_content);
        builder.set(GAP, layout.gap.px(), default.gap.px());
        builder.set(ITEMS, self.item_count, ItemCount::default());

        if builder.pairs.is_empty() {
            return Ok(None);
        }
        build_state(&builder.pairs).map(Some)
    }

    /// Rebuild a state from a `?state=` value. Missing keys keep their defaults.
    pub fn from_share_state(encoded: &str) -> Result<Self, StateError> {
        let mut state = Self::default();
        let layout = &mut state.layout;

        for (key, value) in parse_state(encoded)? {
            match key.as_str() {
                DIRECTION => layout.direction = parse_value(&key, &value, str::parse)?,
                JUSTIFY => layout.justify = parse_value(&key, &value, str::parse)?,
                ALIGN_ITEMS => layout.align_items = parse_value(&key, &value, str::parse)?,
                WRAP => layout.wrap = parse_value(&key, &value, str::parse)?,
                ALIGN_CONTENT => layout.align_content = parse_value(&key, &value, str::parse)?,
                GAP => {
                    layout.gap = parse_value(&key, &value, |v| {
                        v.parse::<i64>().ok().and_then(Gap::try_new).ok_or(())
                    })?
                }
                ITEMS => {
                    state.item_count = parse_value(&key, &value, |v| {
                        v.parse::<usize>()
                            .map_err(|e| e.to_string())
                            .and_then(ItemCount::try_from)
                    })?
                }
                _ => return Err(StateError::UnknownKey(key)),
            }
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{AlignContent, FlexDirection, FlexWrap, LayoutField};

    fn encode(json: &str) -> String {
        URL_SAFE_NO_PAD.encode(json.as_bytes())
    }

    #[test]
    fn test_default_state_has_no_link() {
        assert_eq!(ExplainerState::default().share_state().unwrap(), None);
        assert_eq!(
            ExplainerState::from_share_state("").unwrap(),
            ExplainerState::default()
        );
    }

    #[test]
    fn test_only_changed_fields_are_written() {
        let mut state = ExplainerState::default();
        state.set_field(LayoutField::Direction(FlexDirection::Column));
        state.set_field(LayoutField::Gap(Gap::new(0)));

        let encoded = state.share_state().unwrap().unwrap();
        let pairs = parse_state(&encoded).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs["direction"], "column");
        assert_eq!(pairs["gap"], "0");
    }

    #[test]
    fn test_link_restores_state() {
        let mut state = ExplainerState::default();
        state.set_field(LayoutField::Wrap(FlexWrap::WrapReverse));
        state.set_field(LayoutField::AlignContent(AlignContent::SpaceAround));
        state.set_item_count(ItemCount::Ten);

        let encoded = state.share_state().unwrap().unwrap();
        assert_eq!(ExplainerState::from_share_state(&encoded).unwrap(), state);
    }

    #[test]
    fn test_bad_base64() {
        let err = ExplainerState::from_share_state("***").unwrap_err();
        assert!(matches!(err, StateError::Base64(_)));
    }

    #[test]
    fn test_not_a_string_map() {
        let err = ExplainerState::from_share_state(&encode("[1, 2]")).unwrap_err();
        assert!(matches!(err, StateError::Json(_)));
    }

    #[test]
    fn test_unknown_key() {
        let err = ExplainerState::from_share_state(&encode(r#"{"order":"2"}"#)).unwrap_err();
        assert!(matches!(err, StateError::UnknownKey(ref k) if k == "order"));
    }

    #[test]
    fn test_out_of_domain_values_are_rejected() {
        for json in [
            r#"{"direction":"diagonal"}"#,
            r#"{"gap":"33"}"#,
            r#"{"gap":"-1"}"#,
            r#"{"items":"7"}"#,
            r#"{"align_content":"space-evenly"}"#,
        ] {
            let err = ExplainerState::from_share_state(&encode(json)).unwrap_err();
            assert!(
                matches!(err, StateError::InvalidValue { .. }),
                "{json} gave {err}"
            );
        }
    }
}
