use crate::TrackSelector;

/// Any non-empty track name is accepted as given
pub(crate) fn validate(value: &str) -> TrackSelector {
    TrackSelector::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_echoes_value() {
        let selector = validate("audio & video");
        assert_eq!(selector.value(), "audio & video");
        assert_eq!(selector.name(), "audio & video");
    }
}
