use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Z]+)\}\}").expect("Invalid placeholder pattern"));

/// Replaces every `{{NAME}}` in `template` with `values[NAME]`.
///
/// This is a single pass over the template, so replacement text is never
/// rescanned. Names with no entry in `values` are left as they are.
pub fn substitute(template: &str, values: &HashMap<&str, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
