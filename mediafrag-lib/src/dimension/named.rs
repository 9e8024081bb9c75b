use crate::NamedSelector;

/// Any non-empty id is accepted as given
pub(crate) fn validate(value: &str) -> NamedSelector {
    NamedSelector::new(value)
}
